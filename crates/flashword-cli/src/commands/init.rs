//! The `flashword init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("flashword.toml").exists() {
        println!("flashword.toml already exists, skipping.");
    } else {
        std::fs::write("flashword.toml", SAMPLE_CONFIG)?;
        println!("Created flashword.toml");
    }

    std::fs::create_dir_all("catalogs")?;
    let example_path = std::path::Path::new("catalogs/example.toml");
    if example_path.exists() {
        println!("catalogs/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_CATALOG)?;
        println!("Created catalogs/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Add words to catalogs/example.toml");
    println!("  2. Run: flashword validate --catalog catalogs/example.toml");
    println!("  3. Run: flashword play");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# flashword configuration

store_path = "flashword-store.json"
catalog_path = "catalogs/example.toml"

# Program used to speak revealed words; the word is passed as the last argument.
# speech_command = "espeak -v en-us"

[scoring]
points_correct = 10
penalty = 2
"#;

const EXAMPLE_CATALOG: &str = r#"[catalog]
name = "Example Catalog"
source_language = "he"
target_language = "en-US"

[[words]]
source = "כלב"
target = "Dog"
category = "Animals"

[[words]]
source = "חתול"
target = "Cat"
category = "Animals"

[[words]]
source = "שלום"
target = "Hello"
category = "Greetings"

[[words]]
source = "מים"
target = "Water"
category = "Food"
"#;
