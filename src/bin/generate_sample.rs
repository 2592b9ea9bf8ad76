use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use csv::{Terminator, WriterBuilder};

const MALE_NAMES: [&str; 6] = ["John", "PETER", "Luis", "ÉTIENNE", "o'neil", "Jean-Luc"];
const FEMALE_NAMES: [&str; 6] = ["Mary-Anne", "ALICE", "Zoë", "Ingrid", "bea", "SOFÍA"];

/// Write `names` to `path` as `name,age` rows with deterministic ages.
fn write_sample(path: &Path, names: &[&str], age_seed: u32) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;

    writer.write_record(["name", "age"])?;
    for (i, name) in names.iter().enumerate() {
        let age = (age_seed + i as u32 * 7) % 80 + 1;
        writer.write_record([*name, age.to_string().as_str()])?;
    }
    writer.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    let dir = Path::new("data");
    fs::create_dir_all(dir).context("creating data directory")?;

    write_sample(&dir.join("male.csv"), &MALE_NAMES, 5)?;
    write_sample(&dir.join("female.csv"), &FEMALE_NAMES, 3)?;

    println!(
        "Wrote {} male and {} female rows to {}",
        MALE_NAMES.len(),
        FEMALE_NAMES.len(),
        dir.display()
    );
    Ok(())
}
