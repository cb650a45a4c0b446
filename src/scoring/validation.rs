use crate::input::HealthInput;

/// Validate the numeric fields of a health input.
/// Returns all validation errors at once (not just the first).
pub fn validate_input(input: &HealthInput) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let positive = [
        ("height", input.height),
        ("weight", input.weight),
        ("blood_pressure_systolic", input.blood_pressure_systolic),
        ("blood_pressure_diastolic", input.blood_pressure_diastolic),
        ("sugar_level", input.sugar_level),
        ("cholesterol_ldl", input.cholesterol_ldl),
        ("cholesterol_hdl", input.cholesterol_hdl),
        ("liver_enzyme_alt", input.liver_enzyme_alt),
        ("liver_enzyme_ast", input.liver_enzyme_ast),
    ];

    for (field, value) in positive {
        if !value.is_finite() {
            errors.push(format!("{}: must be a finite number", field));
        } else if value <= 0.0 {
            errors.push(format!("{}: must be positive, got {}", field, value));
        }
    }

    if !input.sleep_duration.is_finite() {
        errors.push("sleep_duration: must be a finite number".to_string());
    } else if input.sleep_duration < 0.0 {
        errors.push(format!(
            "sleep_duration: must be non-negative, got {}",
            input.sleep_duration
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
