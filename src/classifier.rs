//! Wind speed to storm category classification

use crate::constants::saffir_simpson;
use crate::models::Category;

/// Maps a sustained wind speed to a category label
pub trait WindClassifier {
    fn classify(&self, wind_knots: i32) -> Category;
}

/// Saffir-Simpson hurricane wind scale, with the tropical bands below it
#[derive(Debug, Clone, Copy, Default)]
pub struct SaffirSimpson;

impl WindClassifier for SaffirSimpson {
    fn classify(&self, wind_knots: i32) -> Category {
        match wind_knots {
            // -99 marks an unrecorded wind
            w if w < 0 => Category::Unknown,
            w if w < saffir_simpson::TROPICAL_STORM => Category::TropicalDepression,
            w if w < saffir_simpson::CATEGORY_1 => Category::TropicalStorm,
            w if w < saffir_simpson::CATEGORY_2 => Category::Category1,
            w if w < saffir_simpson::CATEGORY_3 => Category::Category2,
            w if w < saffir_simpson::CATEGORY_4 => Category::Category3,
            w if w < saffir_simpson::CATEGORY_5 => Category::Category4,
            _ => Category::Category5,
        }
    }
}

impl<F> WindClassifier for F
where
    F: Fn(i32) -> Category,
{
    fn classify(&self, wind_knots: i32) -> Category {
        self(wind_knots)
    }
}
