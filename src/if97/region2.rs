//! Region 2: superheated vapor up to 1073.15 K and 100 MPa.
//!
//! Forward properties from the ideal-gas plus residual Gibbs parts
//! (IF97 eqs. 15/16/17); backward T(p,h) and T(p,s) split into the
//! 2a/2b/2c subregions, p(h,s) likewise.

use crate::error::Result;
use crate::if97::{R, T_25, boundary, region4, solve};

const J0: [i32; 9] = [0, 1, -5, -4, -3, -2, -1, 2, 3];
const N0: [f64; 9] = [
    -9.692_768_650_021_7,
    10.086_655_968_018,
    -0.005_608_791_128_302,
    0.071_452_738_081_455,
    -0.407_104_982_239_28,
    1.424_081_917_144_4,
    -4.383_951_131_945,
    -0.284_086_324_607_72,
    0.021_268_463_753_307,
];
const IR: [i32; 43] = [
    1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 4, 4, 4, 5, 6, 6, 6, 7, 7, 7, 8, 8, 9, 10, 10, 10,
    16, 16, 18, 20, 20, 20, 21, 22, 23, 24, 24, 24,
];
const JR: [i32; 43] = [
    0, 1, 2, 3, 6, 1, 2, 4, 7, 36, 0, 1, 3, 6, 35, 1, 2, 3, 7, 3, 16, 35, 0, 11, 25, 8, 36, 13, 4,
    10, 14, 29, 50, 57, 20, 35, 48, 21, 53, 39, 26, 40, 58,
];
const NR: [f64; 43] = [
    -1.773_174_247_321_3e-3,
    -0.017_834_862_292_358,
    -0.045_996_013_696_365,
    -0.057_581_259_083_432,
    -0.050_325_278_727_93,
    -3.303_264_167_020_3e-5,
    -1.894_898_751_631_5e-4,
    -3.939_277_724_335_5e-3,
    -0.043_797_295_650_573,
    -2.667_454_791_408_7e-5,
    2.048_173_769_230_9e-8,
    4.387_066_728_443_5e-7,
    -3.227_767_723_857e-5,
    -1.503_392_454_214_8e-3,
    -0.040_668_253_562_649,
    -7.884_730_955_936_7e-10,
    1.279_071_785_228_5e-8,
    4.822_537_271_850_7e-7,
    2.292_207_633_766_1e-6,
    -1.671_476_645_106_1e-11,
    -2.117_147_232_135_5e-3,
    -23.895_741_934_104,
    -5.905_956_432_427e-18,
    -1.262_180_889_910_1e-6,
    -0.038_946_842_435_739,
    1.125_621_136_045_9e-11,
    -8.231_134_089_799_8,
    1.980_971_280_208_8e-8,
    1.040_696_521_017_4e-19,
    -1.023_474_709_592_9e-13,
    -1.001_817_937_951_1e-9,
    -8.088_290_864_698_5e-11,
    0.106_930_318_794_09,
    -0.336_622_505_741_71,
    8.918_584_535_542_1e-25,
    3.062_931_687_623_2e-13,
    -4.200_246_769_820_8e-6,
    -5.905_602_968_563_9e-26,
    3.782_694_761_345_7e-6,
    -1.276_860_893_468_1e-15,
    7.308_761_059_506_1e-29,
    5.541_471_535_077_8e-17,
    -9.436_970_724_121e-7,
];

/// Ideal and residual Gibbs parts with the derivatives every region-2
/// property needs.
struct Gibbs {
    pi: f64,
    tau: f64,
    g0: f64,
    g0_t: f64,
    g0_tt: f64,
    gr: f64,
    gr_p: f64,
    gr_pp: f64,
    gr_pt: f64,
    gr_t: f64,
    gr_tt: f64,
}

fn gibbs(p: f64, t: f64) -> Gibbs {
    let pi = p;
    let tau = 540.0 / t;
    let mut d = Gibbs {
        pi,
        tau,
        g0: pi.ln(),
        g0_t: 0.0,
        g0_tt: 0.0,
        gr: 0.0,
        gr_p: 0.0,
        gr_pp: 0.0,
        gr_pt: 0.0,
        gr_t: 0.0,
        gr_tt: 0.0,
    };
    for k in 0..9 {
        let (j, n) = (J0[k], N0[k]);
        d.g0 += n * tau.powi(j);
        d.g0_t += n * f64::from(j) * tau.powi(j - 1);
        d.g0_tt += n * f64::from(j) * f64::from(j - 1) * tau.powi(j - 2);
    }
    for k in 0..43 {
        let (i, j, n) = (IR[k], JR[k], NR[k]);
        let a = pi.powi(i);
        let b = (tau - 0.5).powi(j);
        d.gr += n * a * b;
        d.gr_p += n * f64::from(i) * pi.powi(i - 1) * b;
        d.gr_pp += n * f64::from(i) * f64::from(i - 1) * pi.powi(i - 2) * b;
        d.gr_t += n * a * f64::from(j) * (tau - 0.5).powi(j - 1);
        d.gr_pt += n * f64::from(i) * pi.powi(i - 1) * f64::from(j) * (tau - 0.5).powi(j - 1);
        d.gr_tt += n * a * f64::from(j) * f64::from(j - 1) * (tau - 0.5).powi(j - 2);
    }
    d
}

// ── Forward properties from (p, T) ──────────────────────────────────

/// Specific volume, m³/kg.
pub fn v_pt(p: f64, t: f64) -> f64 {
    let d = gibbs(p, t);
    R * t / p * d.pi * (1.0 / d.pi + d.gr_p) / 1000.0
}

/// Specific enthalpy, kJ/kg.
pub fn h_pt(p: f64, t: f64) -> f64 {
    let d = gibbs(p, t);
    R * t * d.tau * (d.g0_t + d.gr_t)
}

/// Specific internal energy, kJ/kg.
pub fn u_pt(p: f64, t: f64) -> f64 {
    let d = gibbs(p, t);
    R * t * (d.tau * (d.g0_t + d.gr_t) - d.pi * (1.0 / d.pi + d.gr_p))
}

/// Specific entropy, kJ/(kg·K).
pub fn s_pt(p: f64, t: f64) -> f64 {
    let d = gibbs(p, t);
    R * (d.tau * (d.g0_t + d.gr_t) - (d.g0 + d.gr))
}

/// Isobaric heat capacity, kJ/(kg·K).
pub fn cp_pt(p: f64, t: f64) -> f64 {
    let d = gibbs(p, t);
    -R * d.tau * d.tau * (d.g0_tt + d.gr_tt)
}

/// Isochoric heat capacity, kJ/(kg·K).
pub fn cv_pt(p: f64, t: f64) -> f64 {
    let d = gibbs(p, t);
    R * (-d.tau * d.tau * (d.g0_tt + d.gr_tt)
        - (1.0 + d.pi * d.gr_p - d.tau * d.pi * d.gr_pt).powi(2)
            / (1.0 - d.pi * d.pi * d.gr_pp))
}

/// Speed of sound, m/s.
pub fn w_pt(p: f64, t: f64) -> f64 {
    let d = gibbs(p, t);
    let num = 1.0 + 2.0 * d.pi * d.gr_p + d.pi * d.pi * d.gr_p * d.gr_p;
    let denom = (1.0 - d.pi * d.pi * d.gr_pp)
        + (1.0 + d.pi * d.gr_p - d.tau * d.pi * d.gr_pt).powi(2)
            / (d.tau * d.tau * (d.g0_tt + d.gr_tt));
    (1000.0 * R * t * num / denom).sqrt()
}

// ── Backward T(p, h): subregions 2a / 2b / 2c ───────────────────────

/// The 2b/2c split line p(h) (IF97 eq. 20).
fn p_b2bc(h: f64) -> f64 {
    905.842_785_147_23 - 0.679_557_863_992_41 * h + 1.280_900_273_013_6e-4 * h * h
}

const T2A_PH_I: [i32; 34] = [
    0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 2, 2, 3, 3, 4, 4, 4, 5, 5, 5, 6,
    6, 7,
];
const T2A_PH_J: [i32; 34] = [
    0, 1, 2, 3, 7, 20, 0, 1, 2, 3, 7, 9, 11, 18, 44, 0, 2, 7, 36, 38, 40, 42, 44, 24, 44, 12, 32,
    44, 32, 36, 42, 34, 44, 28,
];
const T2A_PH_N: [f64; 34] = [
    1_089.895_231_828_8,
    849.516_544_955_35,
    -107.817_480_918_26,
    33.153_654_801_263,
    -7.423_201_679_024_8,
    11.765_048_724_356,
    1.844_574_935_579,
    -4.179_270_054_962_4,
    6.247_819_693_581_2,
    -17.344_563_108_114,
    -200.581_768_620_96,
    271.960_654_737_96,
    -455.113_182_858_18,
    3_091.968_860_475_5,
    252_266.403_578_72,
    -6.170_742_286_833_9e-3,
    -0.310_780_466_295_83,
    11.670_873_077_107,
    128_127_984.040_46,
    -985_549_096.232_76,
    2_822_454_697.300_2,
    -3_594_897_141.070_3,
    1_722_734_991.319_7,
    -13_551.334_240_775,
    12_848_734.664_65,
    1.386_572_428_322_6,
    235_988.325_565_14,
    -13_105_236.545_054,
    7_399.983_547_476_6,
    -551_966.970_300_6,
    3_715_408.599_623_3,
    19_127.729_239_66,
    -415_351.648_356_34,
    -62.459_855_192_507,
];

const T2B_PH_I: [i32; 38] = [
    0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 3, 3, 3, 3, 4, 4, 4, 4, 4, 4, 5, 5,
    5, 6, 7, 7, 9, 9,
];
const T2B_PH_J: [i32; 38] = [
    0, 1, 2, 12, 18, 24, 28, 40, 0, 2, 6, 12, 18, 24, 28, 40, 2, 8, 18, 40, 1, 2, 12, 24, 2, 12,
    18, 24, 28, 40, 18, 24, 40, 28, 2, 28, 1, 40,
];
const T2B_PH_N: [f64; 38] = [
    1_489.504_107_951_6,
    743.077_983_140_34,
    -97.708_318_797_837,
    2.474_246_470_567_4,
    -0.632_813_200_160_26,
    1.138_595_212_965_8,
    -0.478_118_636_486_25,
    8.520_812_343_154_4e-3,
    0.937_471_473_779_32,
    3.359_311_860_491_6,
    3.380_935_560_145_4,
    0.168_445_396_719_04,
    0.738_757_452_366_95,
    -0.471_287_374_361_86,
    0.150_202_731_397_07,
    -2.176_411_421_975e-3,
    -0.021_810_755_324_761,
    -0.108_297_844_036_77,
    -0.046_333_324_635_812,
    7.128_035_195_955_1e-5,
    1.103_283_178_999_9e-4,
    1.895_524_838_790_2e-4,
    3.089_154_116_053_7e-3,
    1.355_550_455_494_9e-3,
    2.864_023_747_745_6e-7,
    -1.077_985_735_751_2e-5,
    -7.646_271_245_481_4e-5,
    1.405_239_281_831_6e-5,
    -3.108_381_433_143_4e-5,
    -1.030_273_821_210_3e-6,
    2.821_728_163_504e-7,
    1.270_490_227_194_5e-6,
    7.380_335_346_829_2e-8,
    -1.103_013_923_890_9e-8,
    -8.145_636_520_783_3e-14,
    -2.518_054_568_296_2e-11,
    -1.756_523_396_940_7e-18,
    8.693_415_634_416_3e-15,
];

const T2C_PH_I: [i32; 23] = [
    -7, -7, -6, -6, -5, -5, -2, -2, -1, -1, 0, 0, 1, 1, 2, 6, 6, 6, 6, 6, 6, 6, 6,
];
const T2C_PH_J: [i32; 23] = [
    0, 4, 0, 2, 0, 2, 0, 1, 0, 2, 0, 1, 4, 8, 4, 0, 1, 4, 10, 12, 16, 20, 22,
];
const T2C_PH_N: [f64; 23] = [
    -3_236_839_855_524.2,
    7_326_335_090_218.1,
    358_250_899_454.47,
    -583_401_318_515.9,
    -10_783_068_217.47,
    20_825_544_563.171,
    610_747.835_645_16,
    859_777.225_355_8,
    -25_745.723_604_17,
    31_081.088_422_714,
    1_208.231_586_593_6,
    482.197_551_092_55,
    3.796_600_127_248_6,
    -10.842_984_880_077,
    -0.045_364_172_676_66,
    1.455_911_565_869_8e-13,
    1.126_159_740_723e-12,
    -1.780_498_224_068_6e-11,
    1.232_457_969_083_2e-7,
    -1.160_692_113_098_4e-6,
    2.784_636_708_855_4e-5,
    -5.927_003_847_417_6e-4,
    1.291_858_299_187_8e-3,
];

/// Backward temperature T(p, h), K.
pub fn t_ph(p: f64, h: f64) -> f64 {
    let eta = h / 2000.0;
    if p < 4.0 {
        let mut t = 0.0;
        for k in 0..34 {
            t += T2A_PH_N[k] * p.powi(T2A_PH_I[k]) * (eta - 2.1).powi(T2A_PH_J[k]);
        }
        t
    } else if p < p_b2bc(h) {
        let mut t = 0.0;
        for k in 0..38 {
            t += T2B_PH_N[k] * (p - 2.0).powi(T2B_PH_I[k]) * (eta - 2.6).powi(T2B_PH_J[k]);
        }
        t
    } else {
        let mut t = 0.0;
        for k in 0..23 {
            t += T2C_PH_N[k] * (p + 25.0).powi(T2C_PH_I[k]) * (eta - 1.8).powi(T2C_PH_J[k]);
        }
        t
    }
}

// ── Backward T(p, s): subregions 2a / 2b / 2c ───────────────────────

const T2A_PS_I: [f64; 46] = [
    -1.5, -1.5, -1.5, -1.5, -1.5, -1.5, -1.25, -1.25, -1.25, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0,
    -0.75, -0.75, -0.5, -0.5, -0.5, -0.5, -0.25, -0.25, -0.25, -0.25, 0.25, 0.25, 0.25, 0.25, 0.5,
    0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.75, 0.75, 0.75, 0.75, 1.0, 1.0, 1.25, 1.25, 1.5, 1.5,
];
const T2A_PS_J: [i32; 46] = [
    -24, -23, -19, -13, -11, -10, -19, -15, -6, -26, -21, -17, -16, -9, -8, -15, -14, -26, -13, -9,
    -7, -27, -25, -11, -6, 1, 4, 8, 11, 0, 1, 5, 6, 10, 14, 16, 0, 4, 9, 17, 7, 18, 3, 15, 5, 18,
];
const T2A_PS_N: [f64; 46] = [
    -392_359.838_619_84,
    515_265.738_272_7,
    40_482.443_161_048,
    -321.937_909_239_02,
    96.961_424_218_694,
    -22.867_846_371_773,
    -449_429.141_243_57,
    -5_011.833_602_016_6,
    0.356_844_635_600_15,
    44_235.335_848_19,
    -13_673.388_811_708,
    421_632.602_078_64,
    22_516.925_837_475,
    474.421_448_656_46,
    -149.311_307_976_47,
    -197_811.263_204_52,
    -23_554.399_470_76,
    -19_070.616_302_076,
    55_375.669_883_164,
    3_829.369_143_736_3,
    -603.918_605_805_67,
    1_936.310_262_033_1,
    4_266.064_369_861,
    -5_978.063_887_271_8,
    -704.014_639_268_62,
    338.367_841_075_53,
    20.862_786_635_187,
    0.033_834_172_656_196,
    -4.312_442_841_489_3e-5,
    166.537_913_564_12,
    -139.862_920_558_98,
    -0.788_495_479_998_72,
    0.072_132_411_753_872,
    -5.975_483_939_828_3e-3,
    -1.214_135_895_390_4e-5,
    2.322_709_673_387_1e-7,
    -10.538_463_566_194,
    2.071_892_549_650_2,
    -0.072_193_155_260_427,
    2.074_988_708_112e-7,
    -0.018_340_657_911_379,
    2.903_627_234_869_6e-7,
    0.210_375_278_936_19,
    2.568_123_972_999_9e-4,
    -0.012_799_002_933_781,
    -8.219_810_265_201_8e-6,
];

const T2B_PS_I: [i32; 44] = [
    -6, -6, -5, -5, -4, -4, -4, -3, -3, -3, -3, -2, -2, -2, -2, -1, -1, -1, -1, -1, 0, 0, 0, 0, 0,
    0, 0, 1, 1, 1, 1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 5, 5, 5,
];
const T2B_PS_J: [i32; 44] = [
    0, 11, 0, 11, 0, 1, 11, 0, 1, 11, 12, 0, 1, 6, 10, 0, 1, 5, 8, 9, 0, 1, 2, 4, 5, 6, 9, 0, 1,
    2, 3, 7, 8, 0, 1, 5, 0, 1, 3, 0, 1, 0, 1, 2,
];
const T2B_PS_N: [f64; 44] = [
    316_876.650_834_97,
    20.864_175_881_858,
    -398_593.998_035_99,
    -21.816_058_518_877,
    223_697.851_942_42,
    -2_784.170_344_581_7,
    9.920_743_607_148,
    -75_197.512_299_157,
    2_970.860_595_115_8,
    -3.440_687_854_852_6,
    0.388_155_642_491_15,
    17_511.295_085_75,
    -1_423.711_285_444_9,
    1.094_380_336_416_7,
    0.899_716_193_084_95,
    -3_375.974_009_895_8,
    471.628_858_183_55,
    -1.918_824_199_367_9,
    0.410_785_804_921_96,
    -0.334_653_781_720_97,
    1_387.003_477_750_5,
    -406.633_261_958_38,
    41.727_347_159_61,
    2.193_254_943_453_2,
    -1.032_005_000_907_7,
    0.358_829_435_167_03,
    5.251_145_372_606_6e-3,
    12.838_916_450_705,
    -2.864_243_721_938_1,
    0.569_126_836_648_55,
    -0.099_962_954_584_931,
    -3.263_203_777_845_9e-3,
    2.332_092_257_672_3e-4,
    -0.153_348_098_574_5,
    0.029_072_288_239_902,
    3.753_470_274_116_7e-4,
    1.729_669_170_241_1e-3,
    -3.855_605_084_450_4e-4,
    -3.501_771_229_260_8e-5,
    -1.456_639_363_149_2e-5,
    5.642_085_726_726_9e-6,
    4.128_615_007_460_5e-8,
    -2.068_467_111_882_4e-8,
    1.640_939_367_472_5e-9,
];

const T2C_PS_I: [i32; 30] = [
    -2, -2, -1, 0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4, 5, 5, 5, 6, 6, 7, 7, 7, 7, 7,
];
const T2C_PS_J: [i32; 30] = [
    0, 1, 0, 0, 1, 2, 3, 0, 1, 3, 4, 0, 1, 2, 0, 1, 5, 0, 1, 4, 0, 1, 2, 0, 1, 0, 1, 3, 4, 5,
];
const T2C_PS_N: [f64; 30] = [
    909.685_010_053_65,
    2_404.566_708_842,
    -591.623_263_871_3,
    541.454_041_280_74,
    -270.983_084_111_92,
    979.765_250_979_26,
    -469.667_729_594_35,
    14.399_274_604_723,
    -19.104_204_230_429,
    5.329_916_711_197_1,
    -21.252_975_375_934,
    -0.311_473_344_137_6,
    0.603_348_408_946_23,
    -0.042_764_839_702_509,
    5.818_559_725_525_9e-3,
    -0.014_597_008_284_753,
    5.663_117_563_102_7e-3,
    -7.615_586_458_457_7e-5,
    2.244_034_291_933_2e-4,
    -1.256_109_501_341_3e-5,
    6.332_313_266_093_4e-7,
    -2.054_198_967_537_5e-6,
    3.640_537_039_008_2e-8,
    -2.975_989_778_921_5e-9,
    1.013_661_852_976_3e-8,
    5.992_571_969_235_1e-12,
    -2.067_787_010_516_4e-11,
    -2.087_427_818_188_6e-11,
    1.016_216_682_508_9e-10,
    -1.642_982_828_134_7e-10,
];

/// Backward temperature T(p, s), K.
pub fn t_ps(p: f64, s: f64) -> f64 {
    if p < 4.0 {
        let sigma = s / 2.0;
        let mut t = 0.0;
        for k in 0..46 {
            t += T2A_PS_N[k] * p.powf(T2A_PS_I[k]) * (sigma - 2.0).powi(T2A_PS_J[k]);
        }
        t
    } else if s < 5.85 {
        let sigma = s / 2.9251;
        let mut t = 0.0;
        for k in 0..30 {
            t += T2C_PS_N[k] * p.powi(T2C_PS_I[k]) * (2.0 - sigma).powi(T2C_PS_J[k]);
        }
        t
    } else {
        let sigma = s / 0.7853;
        let mut t = 0.0;
        for k in 0..44 {
            t += T2B_PS_N[k] * p.powi(T2B_PS_I[k]) * (10.0 - sigma).powi(T2B_PS_J[k]);
        }
        t
    }
}

// ── Backward p(h, s): subregions 2a / 2b / 2c ───────────────────────

/// The 2a/2b split line h2ab(s) at p = 4 MPa.
fn h2ab_s(s: f64) -> f64 {
    -3_498.980_834_321_39 + 2_575.607_169_058_76 * s - 421.073_558_227_969 * s * s
        + 27.634_906_379_994_4 * s * s * s
}

const P2A_HS_I: [i32; 29] = [
    0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 3, 3, 3, 3, 3, 4, 5, 5, 6, 7,
];
const P2A_HS_J: [i32; 29] = [
    1, 3, 6, 16, 20, 22, 0, 1, 2, 3, 5, 6, 10, 16, 20, 22, 3, 16, 20, 0, 2, 3, 6, 16, 16, 3, 16,
    3, 1,
];
const P2A_HS_N: [f64; 29] = [
    -1.825_753_619_230_32e-2,
    -0.125_229_548_799_536,
    0.592_290_437_320_145,
    6.047_697_061_851_22,
    238.624_965_444_474,
    -298.639_090_222_922,
    0.051_225_081_304_075,
    -0.437_266_515_606_486,
    0.413_336_902_999_504,
    -5.164_682_545_747_73,
    -5.570_148_384_457_11,
    12.855_503_782_447_8,
    11.414_410_895_329,
    -119.504_225_652_714,
    -2_847.779_859_615_6,
    4_317.578_464_080_06,
    1.128_940_408_026_5,
    1_974.091_862_063_19,
    1_516.124_447_060_87,
    1.413_244_514_212_35e-2,
    0.585_501_282_219_601,
    -2.972_580_758_630_12,
    5.945_673_148_473_19,
    -6_236.565_657_989_05,
    9_659.862_351_333_32,
    6.815_009_349_481_34,
    -6_332.072_868_244_89,
    -5.589_192_244_657_6,
    4.006_457_984_720_63e-2,
];

const P2B_HS_I: [i32; 33] = [
    0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 2, 2, 2, 3, 3, 3, 3, 4, 4, 5, 5, 6, 6, 6, 7, 7, 8, 8, 8, 8,
    12, 14,
];
const P2B_HS_J: [i32; 33] = [
    0, 1, 2, 4, 8, 0, 1, 2, 3, 5, 12, 1, 6, 18, 0, 1, 7, 12, 1, 16, 1, 12, 1, 8, 18, 1, 16, 1, 3,
    14, 18, 10, 16,
];
const P2B_HS_N: [f64; 33] = [
    8.014_969_899_294_95e-2,
    -0.543_862_807_146_111,
    0.337_455_597_421_283,
    8.905_554_511_574_5,
    313.840_736_431_485,
    0.797_367_065_977_789,
    -1.216_169_735_562_4,
    8.728_033_869_374_77,
    -16.976_978_175_760_2,
    -186.552_827_328_416,
    95_115.927_434_423_7,
    -18.916_851_012_049_4,
    -4_334.070_371_948_4,
    543_212_633.012_715,
    0.144_793_408_386_013,
    128.024_559_637_516,
    -67_230.953_407_126_8,
    33_697_238.009_528_7,
    -586.634_196_762_72,
    -22_140_322_476.988_9,
    1_716.066_687_083_89,
    -570_817_595.806_302,
    -3_121.096_931_784_82,
    -2_078_413.846_330_1,
    3_056_059_461_577.86,
    3_221.570_043_143_33,
    326_810_259_797.295,
    -1_441.041_589_344_87,
    410.694_867_802_691,
    109_077_066_873.024,
    -24_796_465_425_889.3,
    1_888_019_068.651_34,
    -123_651_009_018_773.0,
];

const P2C_HS_I: [i32; 31] = [
    0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 4, 5, 5, 5, 5, 6, 6, 10, 12,
    16,
];
const P2C_HS_J: [i32; 31] = [
    0, 1, 2, 3, 4, 8, 0, 2, 5, 8, 14, 2, 3, 7, 10, 18, 0, 5, 8, 16, 18, 18, 1, 4, 6, 14, 8, 18, 7,
    7, 10,
];
const P2C_HS_N: [f64; 31] = [
    0.112_225_607_199_012,
    -3.390_059_536_067_12,
    -32.050_391_173_009_4,
    -197.597_305_104_9,
    -407.693_861_553_446,
    13_294.377_522_233_1,
    1.708_468_397_740_07,
    37.369_419_814_224_5,
    3_581.443_658_154_34,
    423_014.446_424_664,
    -751_071_025.760_063,
    52.344_612_760_789_8,
    -228.351_290_812_417,
    -960_652.417_056_937,
    -80_705_929.252_607_4,
    1_626_980_172_256.69,
    0.772_465_073_604_171,
    46_392.997_383_774_6,
    -13_731_788.513_412_8,
    1_704_703_926_305.12,
    -25_110_462_818_730.8,
    31_774_883_083_552.0,
    53.868_562_367_531_2,
    -55_308.909_462_516_9,
    -1_028_615.224_214_05,
    2_042_494_187_562.34,
    273_918_446.626_977,
    -2.639_631_463_126_85e15,
    -1_078_908_541.080_88,
    -29_649_262_098.012_4,
    -1.117_549_073_234_24e15,
];

/// Backward pressure p(h, s), MPa.
pub fn p_hs(h: f64, s: f64) -> f64 {
    if h < h2ab_s(s) {
        let eta = h / 4200.0;
        let sigma = s / 12.0;
        let mut pi = 0.0;
        for k in 0..29 {
            pi += P2A_HS_N[k] * (eta - 0.5).powi(P2A_HS_I[k]) * (sigma - 1.2).powi(P2A_HS_J[k]);
        }
        pi.powi(4) * 4.0
    } else if s < 5.85 {
        let eta = h / 3500.0;
        let sigma = s / 5.9;
        let mut pi = 0.0;
        for k in 0..31 {
            pi += P2C_HS_N[k] * (eta - 0.7).powi(P2C_HS_I[k]) * (sigma - 1.1).powi(P2C_HS_J[k]);
        }
        pi.powi(4) * 100.0
    } else {
        let eta = h / 4100.0;
        let sigma = s / 7.9;
        let mut pi = 0.0;
        for k in 0..33 {
            pi += P2B_HS_N[k] * (eta - 0.6).powi(P2B_HS_I[k]) * (sigma - 1.01).powi(P2B_HS_J[k]);
        }
        pi.powi(4) * 100.0
    }
}

/// Temperature from (p, ρ) by bisection on the forward density between
/// the saturation curve (or B23 line above 16.5292 MPa) and 1073.15 K.
pub fn t_prho(p: f64, rho: f64) -> Result<f64> {
    let lo = if p < crate::if97::P_13 {
        region4::tsat_p(p)?
    } else {
        boundary::b23_t_p(p)
    };
    solve::bisect_decreasing(
        |t| Ok(1.0 / v_pt(p, t)),
        lo,
        T_25,
        rho,
        1e-6,
        0.0,
        250,
        "region2::t_prho",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_rel(got: f64, want: f64, tol: f64) {
        assert!(((got - want) / want).abs() < tol, "got {got}, want {want}");
    }

    // IF97 release, Table 15.
    #[test]
    fn forward_reference_points() {
        assert_rel(v_pt(0.0035, 300.0), 0.394_913_866e2, 1e-8);
        assert_rel(h_pt(0.0035, 300.0), 0.254_991_145e4, 1e-8);
        assert_rel(u_pt(0.0035, 300.0), 0.241_169_160e4, 1e-8);
        assert_rel(s_pt(0.0035, 300.0), 0.852_238_967e1, 1e-8);
        assert_rel(cp_pt(0.0035, 300.0), 0.191_300_162e1, 1e-8);
        assert_rel(w_pt(0.0035, 300.0), 0.427_920_172e3, 1e-8);

        assert_rel(v_pt(0.0035, 700.0), 0.923_015_898e2, 1e-8);
        assert_rel(h_pt(0.0035, 700.0), 0.333_568_375e4, 1e-8);
        assert_rel(s_pt(0.0035, 700.0), 0.101_749_996e2, 1e-8);

        assert_rel(v_pt(30.0, 700.0), 0.542_946_619e-2, 1e-8);
        assert_rel(h_pt(30.0, 700.0), 0.263_149_474e4, 1e-8);
        assert_rel(s_pt(30.0, 700.0), 0.517_540_298e1, 1e-8);
        assert_rel(cp_pt(30.0, 700.0), 0.103_505_092e2, 1e-8);
        assert_rel(w_pt(30.0, 700.0), 0.480_386_523e3, 1e-8);
    }

    // IF97 release, Table 24 (one point per subregion).
    #[test]
    fn backward_t_ph() {
        assert_rel(t_ph(0.001, 3000.0), 0.534_433_241e3, 1e-8);
        assert_rel(t_ph(3.0, 3000.0), 0.575_373_370e3, 1e-8);
        assert_rel(t_ph(3.0, 4000.0), 0.101_077_577e4, 1e-8);
        assert_rel(t_ph(5.0, 3500.0), 0.801_299_102e3, 1e-8);
        assert_rel(t_ph(25.0, 3500.0), 0.875_279_054e3, 1e-8);
        assert_rel(t_ph(40.0, 2700.0), 0.743_056_411e3, 1e-8);
        assert_rel(t_ph(60.0, 3200.0), 0.882_756_860e3, 1e-8);
    }

    // IF97 release, Table 29.
    #[test]
    fn backward_t_ps() {
        assert_rel(t_ps(0.1, 7.5), 0.399_517_097e3, 1e-8);
        assert_rel(t_ps(0.1, 8.0), 0.514_127_081e3, 1e-8);
        assert_rel(t_ps(2.5, 8.0), 0.103_984_917e4, 1e-8);
        assert_rel(t_ps(8.0, 6.0), 0.600_484_040e3, 1e-8);
        assert_rel(t_ps(90.0, 6.0), 0.103_801_126e4, 1e-8);
        assert_rel(t_ps(20.0, 5.75), 0.697_992_849e3, 1e-8);
        assert_rel(t_ps(80.0, 5.75), 0.949_017_998e3, 1e-8);
    }

    // Supplementary release p(h,s), Table 9.
    #[test]
    fn backward_p_hs() {
        assert_rel(p_hs(2800.0, 6.5), 1.371_012_767, 1e-8);
        assert_rel(p_hs(2800.0, 9.5), 1.879_743_844e-3, 1e-8);
        assert_rel(p_hs(4100.0, 9.5), 1.024_788_997e-1, 1e-8);
        assert_rel(p_hs(2800.0, 6.0), 4.793_911_442, 1e-8);
        assert_rel(p_hs(3600.0, 6.0), 83.955_192_09, 1e-8);
        assert_rel(p_hs(3600.0, 7.0), 7.527_161_441, 1e-8);
        assert_rel(p_hs(2800.0, 5.1), 94.392_020_6, 1e-8);
        assert_rel(p_hs(2800.0, 5.8), 8.414_574_124, 1e-8);
        assert_rel(p_hs(3400.0, 5.8), 83.769_038_79, 1e-8);
    }

    #[test]
    fn density_inversion_round_trip() {
        let p = 5.0;
        let t = 700.0;
        let rho = 1.0 / v_pt(p, t);
        let t_back = t_prho(p, rho).unwrap();
        assert!((t_back - t).abs() < 1e-3, "got {t_back}");
    }
}
