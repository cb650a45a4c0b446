use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::io::{BufRead, Write};
use std::path::Path;
use std::str::FromStr;

use super::{BloodGroup, Gender, HealthInput, Hearing, Vision};
use crate::region::RegionTable;

/// Line-oriented prompt session over any reader/writer pair.
struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Prompt with a message and a default value. Returns default if input is empty.
    fn with_default(&mut self, message: &str, default: &str) -> Result<String> {
        write!(self.writer, "{} [{}]: ", message, default)?;
        self.writer.flush().context("Failed to flush prompt")?;

        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            anyhow::bail!("Input ended before all fields were answered");
        }

        let line = line.trim();
        if line.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(line.to_string())
        }
    }

    /// Re-prompt until the answer parses and passes `check`.
    fn number<T>(&mut self, message: &str, default: T, check: fn(&T) -> bool) -> Result<T>
    where
        T: FromStr + ToString,
    {
        let default = default.to_string();
        loop {
            let answer = self.with_default(message, &default)?;
            match answer.parse::<T>() {
                Ok(value) if check(&value) => return Ok(value),
                _ => writeln!(self.writer, "  Invalid: '{}'. Try again.", answer)?,
            }
        }
    }

    fn choice<T: Copy>(&mut self, message: &str, options: &[(&str, T)], default: &str) -> Result<T> {
        let names: Vec<&str> = options.iter().map(|(name, _)| *name).collect();
        let message = format!("{} ({})", message, names.join("/"));
        loop {
            let answer = self.with_default(&message, default)?;
            if let Some((_, value)) = options
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(&answer))
            {
                return Ok(*value);
            }
            writeln!(self.writer, "  Invalid: choose one of {}.", names.join(", "))?;
        }
    }
}

fn positive(value: &f64) -> bool {
    value.is_finite() && *value > 0.0
}

fn non_negative(value: &f64) -> bool {
    value.is_finite() && *value >= 0.0
}

fn any_age(_: &u32) -> bool {
    true
}

/// Ask for every input field, offering the default record's values.
pub fn collect_input<R: BufRead, W: Write>(
    reader: R,
    writer: W,
    table: &RegionTable,
) -> Result<HealthInput> {
    let defaults = HealthInput::default();
    let mut p = Prompter { reader, writer };

    writeln!(p.writer, "Personal information")?;
    let age = p.number("Age", defaults.age, any_age)?;
    let gender = p.choice(
        "Gender",
        &[
            ("male", Gender::Male),
            ("female", Gender::Female),
            ("other", Gender::Other),
        ],
        "male",
    )?;
    let height = p.number("Height (cm)", defaults.height, positive)?;
    let weight = p.number("Weight (kg)", defaults.weight, positive)?;
    let blood_group = loop {
        let answer = p.with_default("Blood group", defaults.blood_group.as_str())?;
        match BloodGroup::parse(&answer) {
            Some(group) => break group,
            None => writeln!(p.writer, "  Invalid: '{}'. Try again.", answer)?,
        }
    };

    writeln!(p.writer, "Vitals and blood work")?;
    let blood_pressure_systolic =
        p.number("Systolic BP (mmHg)", defaults.blood_pressure_systolic, positive)?;
    let blood_pressure_diastolic =
        p.number("Diastolic BP (mmHg)", defaults.blood_pressure_diastolic, positive)?;
    let sugar_level = p.number("Sugar level (mg/dL)", defaults.sugar_level, positive)?;
    let cholesterol_ldl = p.number("LDL cholesterol (mg/dL)", defaults.cholesterol_ldl, positive)?;
    let cholesterol_hdl = p.number("HDL cholesterol (mg/dL)", defaults.cholesterol_hdl, positive)?;
    let liver_enzyme_alt = p.number("ALT (U/L)", defaults.liver_enzyme_alt, positive)?;
    let liver_enzyme_ast = p.number("AST (U/L)", defaults.liver_enzyme_ast, positive)?;

    writeln!(p.writer, "Lifestyle and senses")?;
    let sleep_duration = p.number("Sleep duration (hours)", defaults.sleep_duration, non_negative)?;
    let vision = p.choice(
        "Vision",
        &[
            ("normal", Vision::Normal),
            ("corrected", Vision::Corrected),
            ("impaired", Vision::Impaired),
        ],
        "normal",
    )?;
    let hearing = p.choice(
        "Hearing",
        &[
            ("normal", Hearing::Normal),
            ("partial", Hearing::Partial),
            ("impaired", Hearing::Impaired),
        ],
        "normal",
    )?;

    let default_region = if table.contains(&defaults.region) {
        defaults.region.clone()
    } else {
        table.names().next().unwrap_or_default().to_string()
    };
    let region = loop {
        let answer = p.with_default("State", &default_region)?;
        if table.contains(&answer) {
            break answer;
        }
        let names: Vec<&str> = table.names().collect();
        writeln!(p.writer, "  Unknown state. Known states: {}", names.join(", "))?;
    };

    Ok(HealthInput {
        age,
        gender,
        height,
        weight,
        blood_group,
        blood_pressure_systolic,
        blood_pressure_diastolic,
        sugar_level,
        cholesterol_ldl,
        cholesterol_hdl,
        liver_enzyme_alt,
        liver_enzyme_ast,
        sleep_duration,
        vision,
        hearing,
        region,
    })
}

/// Write an input record as YAML, replacing any existing file atomically.
pub fn save_input(path: &Path, input: &HealthInput) -> Result<()> {
    let yaml = serde_saphyr::to_string(input)
        .map_err(|e| anyhow::anyhow!("Failed to serialize input: {}", e))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    file.write_all(yaml.as_bytes())
        .with_context(|| format!("Failed to write input to {}", path.display()))?;
    file.commit()
        .with_context(|| format!("Failed to save input to {}", path.display()))?;

    Ok(())
}

/// Prompt on the terminal for every field and save the result to `path`.
pub fn run_init_wizard(path: &Path, table: &RegionTable) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    println!("Health Score input");
    println!("==================");
    println!("Press Enter to accept the value in brackets.");
    println!();

    if path.exists() {
        let mut p = Prompter {
            reader: stdin.lock(),
            writer: stdout.lock(),
        };
        let answer = p.with_default(
            &format!("Input already exists at {}. Overwrite? (y/n)", path.display()),
            "n",
        )?;
        if !answer.eq_ignore_ascii_case("y") && !answer.eq_ignore_ascii_case("yes") {
            println!("Aborted.");
            return Ok(());
        }
    }

    let input = collect_input(stdin.lock(), stdout.lock(), table)?;
    save_input(path, &input)?;

    println!();
    println!("Input written to {}", path.display());
    println!("Run `health-score score {}` to see your score.", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::load_input;
    use crate::region::builtin_table;
    use std::io::Cursor;

    #[test]
    fn test_all_defaults() {
        let answers = "\n".repeat(16);
        let mut out = Vec::new();
        let input = collect_input(Cursor::new(answers), &mut out, &builtin_table()).unwrap();
        assert_eq!(input, HealthInput::default());
    }

    #[test]
    fn test_custom_answers_with_retries() {
        let answers = [
            "52",      // age
            "FEMALE",  // gender, case-insensitive
            "-160",    // height rejected
            "160",     // height
            "64",      // weight
            "b-",      // blood group
            "138",     // systolic
            "88",      // diastolic
            "",        // sugar default
            "",        // ldl default
            "",        // hdl default
            "",        // alt default
            "",        // ast default
            "6.5",     // sleep
            "blurry",  // vision rejected
            "impaired",
            "partial",
            "Atlantis", // region rejected
            "Goa",
        ]
        .join("\n")
            + "\n";
        let mut out = Vec::new();
        let input = collect_input(Cursor::new(answers), &mut out, &builtin_table()).unwrap();

        assert_eq!(input.age, 52);
        assert_eq!(input.gender, Gender::Female);
        assert_eq!(input.height, 160.0);
        assert_eq!(input.blood_group, BloodGroup::BNegative);
        assert_eq!(input.sugar_level, 90.0);
        assert_eq!(input.sleep_duration, 6.5);
        assert_eq!(input.vision, Vision::Impaired);
        assert_eq!(input.hearing, Hearing::Partial);
        assert_eq!(input.region, "Goa");

        let transcript = String::from_utf8(out).unwrap();
        assert!(transcript.contains("Invalid: '-160'"));
        assert!(transcript.contains("Unknown state"));
    }

    #[test]
    fn test_eof_is_error() {
        let mut out = Vec::new();
        let result = collect_input(Cursor::new("30\n"), &mut out, &builtin_table());
        assert!(result.is_err());
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!(
            "health-score-input-test-{}.yaml",
            std::process::id()
        ));
        let input = HealthInput {
            region: "West Bengal".to_string(),
            sleep_duration: 8.5,
            ..HealthInput::default()
        };

        save_input(&path, &input).unwrap();
        let loaded = load_input(&path).unwrap();
        assert_eq!(loaded, input);

        std::fs::remove_file(&path).ok();
    }
}
