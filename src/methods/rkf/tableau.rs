//! Butcher tableaus of embedded Runge-Kutta 4(5) pairs.

use crate::Float;

/// Number of stages of the 4(5) pairs.
pub const STAGES: usize = 6;

/// Coefficients of an explicit embedded Runge-Kutta pair.
///
/// `a` is strictly lower triangular. `b4` and `b5` combine the same stages
/// into the 4th- and 5th-order solutions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tableau {
    pub name: &'static str,
    pub c: [Float; STAGES],
    pub a: [[Float; STAGES]; STAGES],
    pub b4: [Float; STAGES],
    pub b5: [Float; STAGES],
}

impl Tableau {
    /// Runge-Kutta-Fehlberg 4(5).
    pub const FEHLBERG: Tableau = Tableau {
        name: "Fehlberg",
        c: [0.0, 1.0 / 4.0, 3.0 / 8.0, 12.0 / 13.0, 1.0, 1.0 / 2.0],
        a: [
            [0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            [1.0 / 4.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            [3.0 / 32.0, 9.0 / 32.0, 0.0, 0.0, 0.0, 0.0],
            [1932.0 / 2197.0, -7200.0 / 2197.0, 7296.0 / 2197.0, 0.0, 0.0, 0.0],
            [439.0 / 216.0, -8.0, 3680.0 / 513.0, -845.0 / 4104.0, 0.0, 0.0],
            [-8.0 / 27.0, 2.0, -3544.0 / 2565.0, 1859.0 / 4104.0, -11.0 / 40.0, 0.0],
        ],
        b4: [25.0 / 216.0, 0.0, 1408.0 / 2565.0, 2197.0 / 4104.0, -1.0 / 5.0, 0.0],
        b5: [16.0 / 135.0, 0.0, 6656.0 / 12825.0, 28561.0 / 56430.0, -9.0 / 50.0, 2.0 / 55.0],
    };

    /// Cash-Karp 4(5).
    pub const CASH_KARP: Tableau = Tableau {
        name: "Cash-Karp",
        c: [0.0, 1.0 / 5.0, 3.0 / 10.0, 3.0 / 5.0, 1.0, 7.0 / 8.0],
        a: [
            [0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            [1.0 / 5.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            [3.0 / 40.0, 9.0 / 40.0, 0.0, 0.0, 0.0, 0.0],
            [3.0 / 10.0, -9.0 / 10.0, 6.0 / 5.0, 0.0, 0.0, 0.0],
            [-11.0 / 54.0, 5.0 / 2.0, -70.0 / 27.0, 35.0 / 27.0, 0.0, 0.0],
            [
                1631.0 / 55296.0,
                175.0 / 512.0,
                575.0 / 13824.0,
                44275.0 / 110592.0,
                253.0 / 4096.0,
                0.0,
            ],
        ],
        b4: [
            2825.0 / 27648.0,
            0.0,
            18575.0 / 48384.0,
            13525.0 / 55296.0,
            277.0 / 14336.0,
            1.0 / 4.0,
        ],
        b5: [37.0 / 378.0, 0.0, 250.0 / 621.0, 125.0 / 594.0, 0.0, 512.0 / 1771.0],
    };
}

/// Selectable embedded pair. Fehlberg is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RkfTableau {
    #[default]
    Fehlberg,
    CashKarp,
}

impl RkfTableau {
    pub fn tableau(&self) -> &'static Tableau {
        match self {
            Self::Fehlberg => &Tableau::FEHLBERG,
            Self::CashKarp => &Tableau::CASH_KARP,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn check(tab: &Tableau) {
        assert_abs_diff_eq!(tab.b4.iter().sum::<Float>(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(tab.b5.iter().sum::<Float>(), 1.0, epsilon = 1e-12);
        for i in 0..STAGES {
            // Explicit: nothing on or above the diagonal.
            for j in i..STAGES {
                assert_eq!(tab.a[i][j], 0.0, "{} a[{}][{}]", tab.name, i, j);
            }
            // Nodes are the row sums of the coupling matrix.
            assert_abs_diff_eq!(tab.a[i].iter().sum::<Float>(), tab.c[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn fehlberg_is_consistent() {
        check(&Tableau::FEHLBERG);
    }

    #[test]
    fn cash_karp_is_consistent() {
        check(&Tableau::CASH_KARP);
    }

    #[test]
    fn default_selection_is_fehlberg() {
        assert_eq!(RkfTableau::default().tableau().name, "Fehlberg");
        assert_eq!(RkfTableau::CashKarp.tableau().name, "Cash-Karp");
    }
}
