use std::collections::HashSet;
use std::path::Path;

fn main() {
    let vocabulary_path = Path::new("vocabularies/default_skills.json");
    validate_vocabulary_file(vocabulary_path);
    set_build_dependencies();
}

fn validate_vocabulary_file(vocabulary_path: &Path) {
    assert!(
        vocabulary_path.exists(),
        "\n\nVOCABULARY BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the vocabulary file before building.\n",
        vocabulary_path.display()
    );

    let contents = std::fs::read_to_string(vocabulary_path).unwrap_or_else(|e| {
        panic!(
            "\n\nVOCABULARY BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            vocabulary_path.display()
        );
    });

    let vocabulary: serde_json::Value = serde_json::from_str(&contents).unwrap_or_else(|e| {
        panic!(
            "\n\nVOCABULARY BUILD ERROR: Invalid JSON\n\
             Path: {}\n\
             Error: {e}\n\
             Hint: Check for missing commas, brackets, or invalid syntax.\n",
            vocabulary_path.display()
        );
    });

    validate_vocabulary_structure(&vocabulary);
}

fn validate_vocabulary_structure(vocabulary: &serde_json::Value) {
    assert!(
        vocabulary.is_object(),
        "\n\nVOCABULARY BUILD ERROR: Root must be a JSON object\n\
         Got: {vocabulary}\n"
    );

    assert!(
        vocabulary.get("version").and_then(|v| v.as_str()).is_some(),
        "\n\nVOCABULARY BUILD ERROR: Missing string 'version' field\n"
    );

    let skills = vocabulary.get("skills").unwrap_or_else(|| {
        panic!(
            "\n\nVOCABULARY BUILD ERROR: Missing 'skills' field\n\
             The vocabulary must have a top-level 'skills' array.\n"
        );
    });

    let skills = skills.as_array().unwrap_or_else(|| {
        panic!(
            "\n\nVOCABULARY BUILD ERROR: 'skills' must be an array\n\
             Got: {skills}\n"
        );
    });

    let duplicates = validate_skills(skills);

    for skill in &duplicates {
        println!("cargo:warning=Duplicate vocabulary entry '{skill}' will be ignored at load time");
    }

    println!(
        "cargo:warning=Validated vocabulary: {} entries ({} unique)",
        skills.len(),
        skills.len() - duplicates.len()
    );
}

/// Returns the entries that appear more than once.
fn validate_skills(skills: &[serde_json::Value]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();

    for (i, skill) in skills.iter().enumerate() {
        let skill = skill.as_str().unwrap_or_else(|| {
            panic!("\n\nVOCABULARY BUILD ERROR: Entry at index {i} is not a string\n");
        });

        assert!(
            !skill.trim().is_empty(),
            "\n\nVOCABULARY BUILD ERROR: Entry at index {i} is empty\n"
        );

        assert!(
            skill == skill.to_lowercase(),
            "\n\nVOCABULARY BUILD ERROR: Entry '{skill}' (index {i}) must be lowercase\n"
        );

        if !seen.insert(skill) {
            duplicates.push(skill.to_string());
        }
    }

    duplicates
}

fn set_build_dependencies() {
    // Tell cargo to rerun if the vocabulary changes
    println!("cargo:rerun-if-changed=vocabularies/default_skills.json");

    // Tell cargo to rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
