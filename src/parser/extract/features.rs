use crate::parser::Transcript;
use crate::record::Feature;

/// Every tag with at least one trigger present, in `Feature::ALL` order.
pub fn extract(t: &Transcript) -> Vec<Feature> {
    Feature::ALL
        .into_iter()
        .filter(|f| f.is_mentioned(&t.lower))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features(text: &str) -> Vec<Feature> {
        extract(&Transcript::new(text))
    }

    #[test]
    fn none() {
        assert!(features("a quiet flat").is_empty());
    }

    #[test]
    fn all_in_fixed_order() {
        assert_eq!(
            features("Terrace, GARAGE and furnished"),
            vec![Feature::Furnished, Feature::Parking, Feature::Balcony]
        );
    }

    #[test]
    fn no_duplicates() {
        let f = features("furniture included, fully furnished, parking and a garage");
        assert_eq!(f, vec![Feature::Furnished, Feature::Parking]);
    }

    #[test]
    fn stable_across_runs() {
        let text = "balcony with parking";
        assert_eq!(features(text), features(text));
        assert_eq!(features(text), vec![Feature::Parking, Feature::Balcony]);
    }
}
