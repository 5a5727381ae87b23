//! Static time-current data: fuse breakpoints and thermal-trip multipliers.
//!
//! Fuse points were digitized from the manufacturer's gG time-current charts
//! and must stay bit-for-bit identical; every other module treats them as
//! read-only assets.
//!
//! Each of the 22 classes has [`FUSE_POINTS`] breakpoints. The time vectors
//! are shared by rating group and differ only in their last point:
//!
//! | Classes (A) | Time vector | Last point (s) |
//! |---|---|---|
//! | 6 to 63 | `FUSE_TIMES_SMALL` | ≈1148 |
//! | 80 to 400 | `FUSE_TIMES_MEDIUM` | ≈3311 |
//! | 500 to 1250 | `FUSE_TIMES_LARGE` | ≈3981 |

/// Points per fuse characteristic.
pub const FUSE_POINTS: usize = 13;

/// Breakpoint data for one fuse rating class.
#[derive(Debug)]
pub struct FuseCharacteristic {
    /// Rating class in amperes.
    pub rating_a: u16,
    /// Melting currents (A), paired index-wise with `time_s`.
    pub current_a: [f64; FUSE_POINTS],
    /// Melting times (s), ascending.
    pub time_s: &'static [f64; FUSE_POINTS],
}

static FUSE_TIMES_SMALL: [f64; FUSE_POINTS] = [
    0.001, 0.01862087136662867, 0.04875284901033861,
    0.09999999999999998, 0.4875284901033862, 1.0,
    4.875284901033865, 10.000000000000002, 48.752849010338664,
    100.00000000000004, 487.5284901033861, 1000.0000000000007,
    1148.1536214968828,
];

static FUSE_TIMES_MEDIUM: [f64; FUSE_POINTS] = [
    0.001, 0.01862087136662867, 0.04875284901033861,
    0.09999999999999998, 0.4875284901033862, 1.0,
    4.875284901033865, 10.000000000000002, 48.752849010338664,
    100.00000000000004, 487.5284901033861, 1000.0000000000007,
    3311.3112148259115,
];

static FUSE_TIMES_LARGE: [f64; FUSE_POINTS] = [
    0.001, 0.01862087136662867, 0.04875284901033861,
    0.09999999999999998, 0.4875284901033862, 1.0,
    4.875284901033865, 10.000000000000002, 48.752849010338664,
    100.00000000000004, 487.5284901033861, 1000.0000000000007,
    3981.07170553497,
];

/// The 22 standard fuse classes, ascending by rating.
pub static FUSE_TABLE: [FuseCharacteristic; 22] = [
    FuseCharacteristic {
        rating_a: 6,
        current_a: [
            239.88329190194912, 88.71560120379613, 68.07693586937418,
            56.36376558259544, 38.72576449216175, 33.11311214825913,
            23.442288153199236, 20.55890595984142, 15.776112696993486,
            14.387985782558454, 12.302687708123818, 11.534532578210925,
            11.428783347897722,
        ],
        time_s: &FUSE_TIMES_SMALL,
    },
    FuseCharacteristic {
        rating_a: 10,
        current_a: [
            354.81338923357566, 139.31568029453047, 104.47202192208005,
            86.09937521846008, 57.94286964268813, 49.20395356814511,
            35.07518739525681, 30.76096814740709, 23.988329190194907,
            22.387211385683404, 19.952623149688804, 19.142559250210862,
            19.054607179632477,
        ],
        time_s: &FUSE_TIMES_SMALL,
    },
    FuseCharacteristic {
        rating_a: 16,
        current_a: [
            512.8613839913652, 199.52623149688802, 153.46169827992946,
            125.31411749414158, 82.03515443298187, 69.18309709189366,
            49.317380395493615, 43.05266104917107, 34.119291162192866,
            31.1171633710602, 27.227013080779138, 25.82260190634596,
            25.585858869056462,
        ],
        time_s: &FUSE_TIMES_SMALL,
    },
    FuseCharacteristic {
        rating_a: 20,
        current_a: [
            724.4359600749902, 316.22776601683825, 245.4708915685033,
            199.06733389871874, 130.0169578033291, 107.15193052376065,
            75.33555637337177, 65.01296903430907, 48.194779762512745,
            43.55118736855688, 34.994516702835746, 32.433961734934925,
            32.13660538640317,
        ],
        time_s: &FUSE_TIMES_SMALL,
    },
    FuseCharacteristic {
        rating_a: 25,
        current_a: [
            891.2509381337466, 398.1071705534976, 300.6076302628233,
            242.66100950824162, 162.55487557504838, 136.45831365889245,
            92.04495717531714, 79.79946872679767, 60.39486293763802,
            53.333489548762124, 43.85306977749857, 40.83193863326923,
            40.17908108489401,
        ],
        time_s: &FUSE_TIMES_SMALL,
    },
    FuseCharacteristic {
        rating_a: 32,
        current_a: [
            1122.0184543019636, 475.33522594280566, 358.9219346450057,
            295.8012466551549, 198.15270258050998, 165.95869074375622,
            117.21953655481305, 103.0386120441616, 77.62471166286922,
            69.18309709189366, 54.32503314924336, 51.522864458175654,
            51.522864458175654,
        ],
        time_s: &FUSE_TIMES_SMALL,
    },
    FuseCharacteristic {
        rating_a: 40,
        current_a: [
            1412.5375446227545, 630.9573444801932, 496.59232145033644,
            411.14972110452226, 271.01916318908434, 229.08676527677744,
            162.92960326397235, 142.232878712282, 105.9253725177289,
            93.54056741475524, 70.95777679633893, 65.01296903430907,
            64.12095765851618,
        ],
        time_s: &FUSE_TIMES_SMALL,
    },
    FuseCharacteristic {
        rating_a: 50,
        current_a: [
            1995.2623149688804, 851.1380382023776, 636.7955209079158,
            526.0172663907065, 345.9393778261222, 291.7427014001168,
            207.96966871036966, 181.55156627731353, 133.04544179780916,
            117.48975549395293, 88.92011178579486, 81.84647881347904,
            80.16780633876796,
        ],
        time_s: &FUSE_TIMES_SMALL,
    },
    FuseCharacteristic {
        rating_a: 63,
        current_a: [
            2630.2679918953822, 1091.4403364487573, 866.9618757582173,
            707.9457843841387, 453.94161665020357, 376.7037989839092,
            259.4179362118817, 228.034207200042, 169.82436524617444,
            151.3561248436209, 115.34532578210927, 103.2761405761397,
            101.39113857366796,
        ],
        time_s: &FUSE_TIMES_SMALL,
    },
    FuseCharacteristic {
        rating_a: 80,
        current_a: [
            3548.133892335754, 1592.2087270511718, 1282.3305826560227,
            1083.9269140212048, 711.213513653329, 586.1381645140291,
            403.64539296760523, 348.3373150360119, 247.74220576332866,
            216.2718523727022, 157.03628043335542, 141.57937799570811,
            124.16523075924107,
        ],
        time_s: &FUSE_TIMES_MEDIUM,
    },
    FuseCharacteristic {
        rating_a: 100,
        current_a: [
            4466.835921509634, 1995.2623149688804, 1603.2453906900423,
            1348.962882591654, 887.1560120379614, 734.5138681571156,
            506.9907082747048, 434.51022417157156, 311.17163371060195,
            268.5344445658508, 196.3360276836048, 177.0108958317423,
            154.8816618912482,
        ],
        time_s: &FUSE_TIMES_MEDIUM,
    },
    FuseCharacteristic {
        rating_a: 125,
        current_a: [
            5623.413251903499, 2511.886431509581, 2018.3663636815636,
            1690.4409316432666, 1106.6237839776668, 918.3325964835813,
            628.0583588133181, 542.0008904016242, 398.1071705534976,
            348.3373150360119, 258.82129151530927, 227.5097430772073,
            195.43394557753948,
        ],
        time_s: &FUSE_TIMES_MEDIUM,
    },
    FuseCharacteristic {
        rating_a: 160,
        current_a: [
            7079.457843841383, 3349.654391578277, 2685.344445658508,
            2238.7211385683418, 1482.5180851459545, 1230.2687708123824,
            833.6811846196346, 724.4359600749902, 533.3348954876211,
            467.7351412871983, 346.7368504525318, 304.78949896279846,
            247.17241450161296,
        ],
        time_s: &FUSE_TIMES_MEDIUM,
    },
    FuseCharacteristic {
        rating_a: 200,
        current_a: [
            9120.108393559109, 4466.835921509634, 3589.219346450058,
            2999.1625189876513, 1954.3394557753952, 1629.296032639724,
            1101.539309541415, 939.7233105646382, 688.6522963442766,
            601.1737374832782, 443.6086439314326, 388.15036599064837,
            322.10687912834356,
        ],
        time_s: &FUSE_TIMES_MEDIUM,
    },
    FuseCharacteristic {
        rating_a: 250,
        current_a: [
            11748.975549395318, 5623.413251903499, 4477.133041763624,
            3732.5015779572095, 2471.72414501613, 2051.162178825565,
            1374.041975012516, 1180.3206356517303, 851.1380382023776,
            749.8942093324565, 552.0774392807579, 485.28850016212147,
            402.71703432545945,
        ],
        time_s: &FUSE_TIMES_MEDIUM,
    },
    FuseCharacteristic {
        rating_a: 315,
        current_a: [
            15488.166189124853, 7079.457843841383, 5610.479760324709,
            4655.860935229593, 3097.4192992165836, 2552.701302661249,
            1725.8378919902048, 1479.1083881682086, 1078.9467222298294,
            939.7233105646382, 687.0684400142328, 608.135001278718,
            509.3308710571956,
        ],
        time_s: &FUSE_TIMES_MEDIUM,
    },
    FuseCharacteristic {
        rating_a: 400,
        current_a: [
            22908.67652767775, 10000.00000000001, 7585.775750291839,
            6194.410750767819, 3908.4089579240235, 3258.3670100200893,
            2197.859872784826, 1896.7059212111483, 1361.4446824659506,
            1199.49930314938, 868.9604292863023, 770.9034690644304,
            645.6542290346559,
        ],
        time_s: &FUSE_TIMES_MEDIUM,
    },
    FuseCharacteristic {
        rating_a: 500,
        current_a: [
            31622.77660168384, 13335.214321633259, 10162.486928706961,
            8336.811846196348, 5432.503314924331, 4456.562483975033,
            3019.9517204020176, 2606.153549998898, 1866.3796908346708,
            1621.8100973589308, 1172.1953655481307, 1030.3861204416162,
            807.2350302488384,
        ],
        time_s: &FUSE_TIMES_LARGE,
    },
    FuseCharacteristic {
        rating_a: 630,
        current_a: [
            39810.71705534974, 18836.490894898037, 14554.590805819682,
            11939.88104464275, 8128.305161641007, 6839.116472814298,
            4497.798548932884, 3810.6582339377314, 2666.858664521482,
            2290.867652767775, 1581.2480392703844, 1352.0725631942773,
            1023.2929922807547,
        ],
        time_s: &FUSE_TIMES_LARGE,
    },
    FuseCharacteristic {
        rating_a: 800,
        current_a: [
            56234.13251903495, 24490.632418447498, 18879.913490962947,
            15488.166189124853, 10471.285480509003, 8830.799004185646,
            5970.352865838369, 5035.006087879056, 3443.4993076333894,
            2904.0226544644534, 1972.4227361148548, 1682.674061070469,
            1288.2495516931347,
        ],
        time_s: &FUSE_TIMES_LARGE,
    },
    FuseCharacteristic {
        rating_a: 1000,
        current_a: [
            70794.57843841378, 30760.96814740714, 23659.196974857587,
            19408.85877592782, 13182.56738556409, 11040.78619902074,
            7328.245331389056, 6208.690342300644, 4315.1907682776555,
            3689.775985701507, 2477.422057633287, 2074.9135174549115,
            1621.8100973589308,
        ],
        time_s: &FUSE_TIMES_LARGE,
    },
    FuseCharacteristic {
        rating_a: 1250,
        current_a: [
            100000.0000000002, 43151.90768277653, 33189.44575526104,
            27227.013080779132, 18323.144223712126, 15417.004529495585,
            10000.00000000001, 8413.95141645195, 5584.701947368314,
            4677.351412871984, 3083.1879502493534, 2612.1613543992084,
            2041.7379446695318,
        ],
        time_s: &FUSE_TIMES_LARGE,
    },
];
/// Trip times (s) of the thermal-magnetic type C envelope, longest first.
pub static THERMAL_C_TIMES_S: [f64; 12] = [
    10e6, 14400.0, 600.0, 40.0, 8.0, 2.0, 0.8, 0.05, 0.03, 0.02, 0.012, 0.003,
];

/// Current multiples of `I_t` paired index-wise with [`THERMAL_C_TIMES_S`].
pub static THERMAL_C_MULTIPLIERS: [f64; 12] = [
    1.13, 1.13, 1.25, 1.5, 2.0, 3.0, 5.0, 5.0, 5.3, 6.4, 90.0, 100000.0,
];

/// Returns the characteristic of an exact rating class, if tabulated.
pub fn fuse_characteristic(rating_a: f64) -> Option<&'static FuseCharacteristic> {
    FUSE_TABLE
        .iter()
        .find(|c| f64::from(c.rating_a) == rating_a)
}

/// Standard rating classes in ascending order.
pub fn fuse_ratings() -> impl Iterator<Item = u16> {
    FUSE_TABLE.iter().map(|c| c.rating_a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_by_rating() {
        let ratings: Vec<u16> = fuse_ratings().collect();
        assert_eq!(ratings.len(), 22);
        assert!(ratings.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(ratings.first(), Some(&6));
        assert_eq!(ratings.last(), Some(&1250));
    }

    #[test]
    fn time_vectors_follow_rating_groups() {
        for c in &FUSE_TABLE {
            let last = c.time_s[FUSE_POINTS - 1];
            let expected = match c.rating_a {
                6..=63 => 1148.1536214968828,
                80..=400 => 3311.3112148259115,
                500..=1250 => 3981.07170553497,
                other => panic!("unexpected class {other}"),
            };
            assert_eq!(last, expected, "rating {}", c.rating_a);
        }
    }

    #[test]
    fn lookup_requires_exact_class() {
        assert!(fuse_characteristic(80.0).is_some());
        assert!(fuse_characteristic(81.0).is_none());
        assert!(fuse_characteristic(79.999).is_none());
    }

    #[test]
    fn spot_check_digitized_values() {
        let c = fuse_characteristic(1250.0).map(|c| c.current_a[0]);
        assert_eq!(c, Some(100000.0000000002));
        let c = fuse_characteristic(32.0).map(|c| c.current_a[12]);
        assert_eq!(c, Some(51.522864458175654));
    }

    #[test]
    fn thermal_c_envelope_shape() {
        assert_eq!(THERMAL_C_TIMES_S.len(), THERMAL_C_MULTIPLIERS.len());
        assert!(THERMAL_C_TIMES_S.windows(2).all(|w| w[0] > w[1]));
        assert!(THERMAL_C_MULTIPLIERS.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(THERMAL_C_TIMES_S[0], 1e7);
    }
}
