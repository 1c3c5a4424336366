use crate::square::NUM_SQUARES;

// Multipliers for the sliding attack tables, indexed by square (a1 = 0).  Each one maps every
// blocker subset of that square's relevance mask, shifted right by 64 minus the mask's
// popcount, onto a slot that no subset with a different attack set shares.  Finding them is an
// offline search; these are fixed data.

pub const ROOK_MAGICS: [u64; NUM_SQUARES] = [
    0x0480_0840_0081_2010, 0x0040_0010_00C1_2000, 0x0200_104A_0082_4020, 0x8880_1000_2800_2580,
    0x2080_1400_0800_0280, 0x0100_0100_0608_0400, 0x0100_4A00_0081_0004, 0x0080_02A8_4100_0080,
    0x0021_8001_4000_2081, 0x000C_4010_0140_2000, 0x0852_0040_2010_8200, 0x0056_0020_400A_0011,
    0x8008_8004_0180_0802, 0x1209_000A_0401_0028, 0x2043_0016_0009_0004, 0x0404_8000_8010_4900,
    0x1080_0040_02A0_0040, 0x0050_0040_0048_2000, 0x0000_8880_2000_D000, 0x0101_8080_1000_0806,
    0x08A2_0200_2044_0890, 0x0001_0100_0204_0008, 0x1500_8400_0208_0190, 0x0010_0200_0400_8041,
    0x0080_0441_4000_E000, 0x0020_2000_8080_4000, 0x0020_2000_8080_1000, 0x0208_0800_8010_0080,
    0x8040_4400_8080_0800, 0x0028_0400_801A_0080, 0x0010_0514_0048_1026, 0x1580_800C_8002_4500,
    0x0080_0040_0AC0_2001, 0x0001_0082_0200_4264, 0x0900_11C3_0500_2000, 0x0000_8800_8480_1000,
    0x0200_0400_8080_4800, 0x0002_0011_0200_0C08, 0x0C09_1048_0C00_0201, 0x0000_8008_4080_0300,
    0x0080_2488_4008_8000, 0x2018_2000_5008_4000, 0x2800_4082_0012_0020, 0x4000_10C2_0022_000A,
    0x0A51_0104_0801_0010, 0x0402_0010_08C2_0044, 0x0801_0402_0001_0100, 0x0400_0182_4412_0001,
    0x8195_0180_0040_2900, 0x2840_8040_0100_2100, 0x0000_8010_0020_0080, 0x1001_3001_0800_8080,
    0x8025_2400_8008_0080, 0x0209_0002_0844_0100, 0x0021_0024_8200_0100, 0x01A1_0000_C601_A100,
    0x0000_5080_01A0_C101, 0x4022_5420_8100_4005, 0x0204_2042_000A_8052, 0x4000_A069_0004_5001,
    0x0102_0010_0C20_0802, 0x0003_0008_0224_0005, 0x0080_0210_0800_8104, 0x0002_8A41_1084_0062,
];

pub const BISHOP_MAGICS: [u64; NUM_SQUARES] = [
    0x0002_1010_0100_4084, 0x0053_B801_C102_0382, 0x0488_1099_0208_0808, 0x0114_0416_8000_04C0,
    0x0004_04A0_1200_0180, 0x4001_0460_0400_0401, 0x0004_0404_0C04_0010, 0x2021_4501_9820_0200,
    0x8002_20A0_0400_C080, 0x0040_1001_0240_8200, 0x0800_0808_2102_2010, 0x0000_040C_2880_0002,
    0x2000_1404_A020_0200, 0x0304_CC24_0440_6212, 0x3825_0202_0202_4002, 0x4160_4202_2092_2810,
    0x0609_0110_2018_0080, 0x0020_0208_3880_8080, 0x0610_0002_1400_1020, 0x0182_0004_0212_0124,
    0x0616_0284_010C_0422, 0x0000_2002_0084_2009, 0x0902_0004_0101_0800, 0x0801_6015_0411_0C08,
    0x0060_0C52_0A10_0440, 0x1250_1081_042C_1091, 0x1008_0200_0104_0500, 0x8810_0400_2044_0008,
    0x1002_0400_8200_8605, 0x0080_4180_0100_A001, 0x8020_8101_0198_1802, 0x2401_1041_0104_0890,
    0x0004_0440_41A0_A208, 0x0800_8C30_2120_0A80, 0x2404_0208_80A1_0400, 0x0404_0281_8008_0200,
    0x1005_0104_000E_0120, 0x0210_0210_2112_1001, 0x0406_2401_0000_4844, 0x00C1_0504_A221_0400,
    0x0200_8430_0810_4110, 0x2000_B410_0804_0200, 0x0000_2021_3008_0800, 0x5250_2E20_1800_2100,
    0x0107_0842_0820_0400, 0x0020_2001_41C0_A081, 0x6060_0102_0090_0200, 0x8801_0401_09C2_0A02,
    0x802C_1403_880A_0000, 0x0C80_2098_2828_4000, 0x2000_0200_4A08_8209, 0x0808_8802_2188_2010,
    0x2104_8010_0602_0001, 0x0800_2020_1218_808A, 0x28C9_4208_0A04_0880, 0x1020_0400_8208_4044,
    0x0041_0248_0C04_1234, 0x0041_0F08_C804_0500, 0xA001_0000_4618_0402, 0x4000_041A_0884_1C00,
    0x1040_0060_4405_0400, 0x0000_0804_6144_0102, 0x6250_A020_0440_8192, 0x014C_0802_C400_8201,
];
