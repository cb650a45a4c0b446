use super::aggregate::CategoryScores;
use crate::input::HealthInput;
use crate::region::RegionContext;

/// Categories scoring below this get advice
const ADVICE_THRESHOLD: f64 = 70.0;

const HIGH_ALTITUDE_M: f64 = 1500.0;
const HIGH_HUMIDITY: f64 = 70.0;
const LOW_HUMIDITY: f64 = 40.0;
const POOR_AQI: f64 = 80.0;
const SPARSE_HEALTHCARE: f64 = 6.0;

/// Build advisory messages in a fixed order: regional climate first, then
/// one per weak category, then environmental follow-ups.
pub fn generate_recommendations(
    input: &HealthInput,
    scores: &CategoryScores,
    ctx: &RegionContext,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if ctx.altitude > HIGH_ALTITUDE_M {
        recommendations.push(
            "High altitude location: Consider regular oxygen level monitoring and maintain proper hydration."
                .to_string(),
        );
    }

    if ctx.humidity > HIGH_HUMIDITY {
        recommendations.push(
            "High humidity area: Stay well-hydrated and watch for respiratory issues.".to_string(),
        );
    } else if ctx.humidity < LOW_HUMIDITY {
        recommendations
            .push("Low humidity area: Use humidifiers and maintain skin hydration.".to_string());
    }

    if scores.body_composition < ADVICE_THRESHOLD {
        recommendations.push(
            "Consider consulting an Ayurvedic nutritionist for personalized diet advice."
                .to_string(),
        );
    }

    if scores.cardiovascular < ADVICE_THRESHOLD {
        recommendations.push(
            "Regular yoga and cardiovascular exercise recommended. Monitor BP regularly."
                .to_string(),
        );
    }

    if scores.metabolic < ADVICE_THRESHOLD {
        recommendations.push(
            "Schedule check-ups at your nearest government health center or private clinic."
                .to_string(),
        );
    }

    if scores.lifestyle < ADVICE_THRESHOLD {
        recommendations.push(
            "Practice meditation and maintain regular sleep schedule (7-9 hours).".to_string(),
        );
    }

    if scores.environmental < ADVICE_THRESHOLD {
        if ctx.aqi > POOR_AQI {
            recommendations.push(format!(
                "Air quality in {} is concerning (AQI: {}). Use air purifiers indoors.",
                input.region, ctx.aqi
            ));
        }
        if ctx.healthcare_density < SPARSE_HEALTHCARE {
            recommendations.push(
                "Register with your nearest primary health center for regular check-ups."
                    .to_string(),
            );
        }
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::aggregate::CategoryScores;

    fn scores(value: f64) -> CategoryScores {
        CategoryScores::from_fn(|_| value)
    }

    fn mild_region() -> RegionContext {
        RegionContext::new(75.0, 40.0, 7.0, 200.0, 55.0)
    }

    fn input_for(region: &str) -> HealthInput {
        HealthInput {
            region: region.to_string(),
            ..HealthInput::default()
        }
    }

    #[test]
    fn test_empty_when_nothing_fires() {
        let recs = generate_recommendations(&input_for("Goa"), &scores(90.0), &mild_region());
        assert!(recs.is_empty());
    }

    #[test]
    fn test_full_order() {
        let ctx = RegionContext::new(50.0, 95.0, 4.0, 2200.0, 80.0);
        let recs = generate_recommendations(&input_for("Himachal Pradesh"), &scores(10.0), &ctx);

        assert_eq!(recs.len(), 8);
        assert!(recs[0].starts_with("High altitude location"));
        assert!(recs[1].starts_with("High humidity area"));
        assert!(recs[2].contains("nutritionist"));
        assert!(recs[3].contains("Monitor BP"));
        assert!(recs[4].contains("check-ups at your nearest government"));
        assert!(recs[5].contains("meditation"));
        assert_eq!(
            recs[6],
            "Air quality in Himachal Pradesh is concerning (AQI: 95). Use air purifiers indoors."
        );
        assert!(recs[7].contains("primary health center"));
    }

    #[test]
    fn test_low_humidity_exclusive_with_high() {
        let dry = RegionContext::new(75.0, 40.0, 7.0, 200.0, 35.0);
        let recs = generate_recommendations(&input_for("Rajasthan"), &scores(90.0), &dry);
        assert_eq!(recs.len(), 1);
        assert!(recs[0].starts_with("Low humidity area"));
    }

    #[test]
    fn test_humidity_boundaries_do_not_fire() {
        for humidity in [40.0, 70.0] {
            let ctx = RegionContext::new(75.0, 40.0, 7.0, 200.0, humidity);
            let recs = generate_recommendations(&input_for("Goa"), &scores(90.0), &ctx);
            assert!(recs.is_empty(), "humidity {humidity}");
        }
    }

    #[test]
    fn test_threshold_is_strict() {
        let recs = generate_recommendations(&input_for("Goa"), &scores(70.0), &mild_region());
        assert!(recs.is_empty());
    }

    #[test]
    fn test_environmental_block_needs_context() {
        // Weak environmental score but clean air and dense healthcare
        let mut weak = scores(90.0);
        weak.environmental = 30.0;
        let recs = generate_recommendations(&input_for("Goa"), &weak, &mild_region());
        assert!(recs.is_empty());
    }

    #[test]
    fn test_single_weak_category() {
        let mut weak = scores(90.0);
        weak.lifestyle = 40.0;
        let recs = generate_recommendations(&input_for("Goa"), &weak, &mild_region());
        assert_eq!(
            recs,
            vec!["Practice meditation and maintain regular sleep schedule (7-9 hours).".to_string()]
        );
    }
}
