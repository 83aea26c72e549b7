/// Closed-form moments of the sum of `num_dice` independent dice, each uniform
/// over `1..=faces`, shifted by a constant `offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub mean: f64,
    pub variance: f64,
    pub standard_deviation: f64,
    pub coefficient_of_variance: f64,
}

impl Stats {
    /// A zero mean is not special-cased: the coefficient of variance follows
    /// IEEE division and comes out as an infinity or `NaN`.
    pub fn compute(faces: u32, num_dice: u32, offset: f64) -> Stats {
        let faces = f64::from(faces);
        let num_dice = f64::from(num_dice);

        let mean = offset + num_dice * (faces + 1.) / 2.;
        let variance = num_dice * (faces.powi(2) - 1.) / 12.;
        let standard_deviation = variance.sqrt();

        Stats {
            mean,
            variance,
            standard_deviation,
            coefficient_of_variance: standard_deviation / mean,
        }
    }
}
