/// A magnitude threshold: once a summed amount in `from` reaches
/// `threshold`, it is expressed in `to` instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Promotion {
    pub from: &'static str,
    pub to: &'static str,
    pub threshold: f64,
    pub divisor: f64,
}

pub static PROMOTIONS: &[Promotion] = &[
    Promotion {
        from: "ml",
        to: "dl",
        threshold: 100.0,
        divisor: 100.0,
    },
    Promotion {
        from: "dl",
        to: "l",
        threshold: 10.0,
        divisor: 10.0,
    },
    Promotion {
        from: "g",
        to: "kg",
        threshold: 1000.0,
        divisor: 1000.0,
    },
];

/// Apply at most one promotion step. 1500 ml becomes 15 dl, not 1.5 l.
pub fn promote(amount: f64, unit: &str) -> (f64, &str) {
    match PROMOTIONS
        .iter()
        .find(|p| p.from == unit && amount >= p.threshold)
    {
        Some(p) => (amount / p.divisor, p.to),
        None => (amount, unit),
    }
}
