use std::fs;

use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, TEMPLATE_PATH};

const SWORDS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<items xmlns="stendhal">
  <item name="Sword">
    <type class="sword" subclass="sword" tileid="-1"/>
    <description>A sharp blade</description>
    <attributes>
      <atk value="12"/>
    </attributes>
  </item>
  <item name="Club">
    <type class="club" subclass="club" tileid="-1"/>
  </item>
  <item name="Sword">
    <description>Another variant</description>
  </item>
  <item name="Sword">
  </item>
</items>
"#;

const ANIMALS_XML: &str = "<creatures>\r\n  <creature name=\"rat\">\r\n    <description>A small rodent</description>\r\n  </creature>\r\n</creatures>\r\n";

fn stendhal_project() -> Result<CliTest> {
    let test = CliTest::project()?;
    test.write_file("data/conf/items/swords.xml", SWORDS_XML)?;
    test.write_file(
        "data/conf/items/meta.xml",
        "<item name=\"Internal\">\n<description>never shown</description>\n</item>\n",
    )?;
    test.write_file(
        "data/conf/items/dummy_weapons.xml",
        "<item name=\"Dummy\">\n</item>\n",
    )?;
    test.write_file("data/conf/creatures/animals.xml", ANIMALS_XML)?;
    test.write_file("data/conf/creatures/empty.xml", "<creatures>\n</creatures>\n")?;
    Ok(test)
}

const EXPECTED_TEMPLATE: &str = "
##
## Language: <name> (<code>)
## Translators: <translator1>[, <translator2>...]
##


# items names and descriptions

## swords

Sword=
A sharp blade=
Another variant=

Club=


# creatures names and descriptions

## animals

rat=
A small rodent=
";

#[test]
fn test_generates_template() -> Result<()> {
    let test = stendhal_project()?;

    let output = test.run()?;

    assert!(output.status.success());
    assert_eq!(test.template()?, EXPECTED_TEMPLATE);

    Ok(())
}

#[test]
fn test_template_snapshot() -> Result<()> {
    let test = stendhal_project()?;

    test.run()?;

    let template = test.template()?;
    assert_snapshot!("exported_template", template.trim_start_matches('\n'));

    Ok(())
}

#[test]
fn test_console_output() -> Result<()> {
    let test = stendhal_project()?;

    let output = test.run()?;

    let expected = format!(
        "parsing type: items\n\
         parsing items names and descriptions from category 'swords'\n\
         parsing type: creatures\n\
         parsing creatures names and descriptions from category 'animals'\n\
         parsing creatures names and descriptions from category 'empty'\n\
         warning: 'creatures' category 'empty' is empty, skipping\n\
         \u{2713} template exported to '{}'\n",
        test.display(TEMPLATE_PATH)
    );
    assert_eq!(String::from_utf8(output.stdout)?, expected);
    assert!(output.stderr.is_empty());

    Ok(())
}

#[test]
fn test_output_is_byte_identical_across_runs() -> Result<()> {
    let test = stendhal_project()?;

    test.run()?;
    let first = fs::read(test.root().join(TEMPLATE_PATH))?;
    test.run()?;
    let second = fs::read(test.root().join(TEMPLATE_PATH))?;

    assert_eq!(first, second);

    Ok(())
}

#[test]
fn test_commented_records_are_excluded() -> Result<()> {
    let test = CliTest::project()?;
    test.write_file(
        "data/conf/items/food.xml",
        r#"<items>
  <!-- disabled until the quest is ready
  <item name="Golden Apple">
    <description>Shiny</description>
  </item>
  -->
  <!-- single line comment -->
  <item name="Apple">
    <description>Crunchy</description>
  </item>
</items>
"#,
    )?;

    let output = test.run()?;

    assert!(output.status.success());
    let template = test.template()?;
    assert!(!template.contains("Golden Apple"));
    assert!(!template.contains("Shiny"));
    assert!(template.contains("\n## food\n\nApple=\nCrunchy=\n"));

    Ok(())
}

#[test]
fn test_excluded_categories_never_appear() -> Result<()> {
    let test = stendhal_project()?;

    test.run()?;

    let template = test.template()?;
    assert!(!template.contains("## meta"));
    assert!(!template.contains("Internal"));
    assert!(!template.contains("## dummy_weapons"));
    assert!(!template.contains("Dummy"));

    Ok(())
}

#[test]
fn test_missing_type_directory_is_not_fatal() -> Result<()> {
    let test = CliTest::project()?;
    test.write_file(
        "data/conf/items/tools.xml",
        "<item name=\"Pick\">\n</item>\n",
    )?;

    let output = test.run()?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains(&format!(
        "warning: '{}' directory not found, excluding from translations template",
        test.display("data/conf/creatures")
    )));
    assert!(stdout.contains(
        "warning: no 'creatures' categories found, excluding from translation template"
    ));

    let template = test.template()?;
    assert!(template.contains("\n## tools\n\nPick=\n"));
    assert!(template.ends_with("\n\n# creatures names and descriptions"));

    Ok(())
}

#[test]
fn test_missing_languages_directory_is_fatal() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "data/conf/items/tools.xml",
        "<item name=\"Pick\">\n</item>\n",
    )?;

    let output = test.run()?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        String::from_utf8(output.stderr)?,
        format!(
            "error: '{}' directory not found, cannot create translation template\n",
            test.display("data/languages")
        )
    );
    assert!(!test.root().join(TEMPLATE_PATH).exists());

    Ok(())
}

#[test]
fn test_runs_from_nested_directory() -> Result<()> {
    let test = stendhal_project()?;
    test.create_dir("buildtools/scripts")?;

    let output = test
        .command_in(&test.root().join("buildtools/scripts"))
        .output()?;

    assert!(output.status.success());
    assert_eq!(test.template()?, EXPECTED_TEMPLATE);

    Ok(())
}

#[test]
fn test_explicit_root() -> Result<()> {
    let test = stendhal_project()?;
    let elsewhere = tempfile::TempDir::new()?;

    let output = test
        .command_in(elsewhere.path())
        .arg("--root")
        .arg(test.root())
        .output()?;

    assert!(output.status.success());
    assert_eq!(test.template()?, EXPECTED_TEMPLATE);

    Ok(())
}

#[test]
fn test_rejects_unknown_arguments() -> Result<()> {
    let test = CliTest::project()?;

    let output = test.command().arg("--verbose").output()?;

    // Usage errors must not be confused with the not-found status (2).
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stderr)?.contains("--verbose"));
    assert!(!test.root().join(TEMPLATE_PATH).exists());

    Ok(())
}

#[test]
fn test_help_exits_successfully() -> Result<()> {
    let test = CliTest::project()?;

    let output = test.command().arg("--help").output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8(output.stdout)?.contains("--root"));
    assert!(!test.root().join(TEMPLATE_PATH).exists());

    Ok(())
}

#[cfg(unix)]
#[test]
fn test_unreadable_category_is_fatal() -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let test = CliTest::project()?;
    test.write_file(
        "data/conf/items/locked.xml",
        "<item name=\"Key\">\n</item>\n",
    )?;
    let locked = test.root().join("data/conf/items/locked.xml");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000))?;

    // Privileged users bypass file modes; nothing to observe then.
    if fs::read(&locked).is_ok() {
        return Ok(());
    }

    let output = test.run()?;

    assert_eq!(output.status.code(), Some(13));
    assert_eq!(
        String::from_utf8(output.stderr)?,
        format!(
            "error: cannot open '{}' for reading, permission denied\n",
            locked.display()
        )
    );
    assert!(!test.root().join(TEMPLATE_PATH).exists());

    Ok(())
}

#[cfg(unix)]
#[test]
fn test_read_only_languages_directory_is_fatal() -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let test = stendhal_project()?;
    let languages = test.root().join("data/languages");
    fs::set_permissions(&languages, fs::Permissions::from_mode(0o555))?;

    // Privileged users bypass directory modes; nothing to observe then.
    let write_check = languages.join(".write-check");
    if fs::write(&write_check, "").is_ok() {
        fs::remove_file(&write_check)?;
        return Ok(());
    }

    let output = test.run()?;
    fs::set_permissions(&languages, fs::Permissions::from_mode(0o755))?;

    assert_eq!(output.status.code(), Some(13));
    assert_eq!(
        String::from_utf8(output.stderr)?,
        format!(
            "error: cannot open '{}' for writing, permission denied\n",
            test.display(TEMPLATE_PATH)
        )
    );
    assert!(!test.root().join(TEMPLATE_PATH).exists());

    Ok(())
}

#[cfg(unix)]
#[test]
fn test_unlistable_type_directory_is_fatal() -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let test = stendhal_project()?;
    let items = test.root().join("data/conf/items");
    fs::set_permissions(&items, fs::Permissions::from_mode(0o300))?;

    // Privileged users bypass directory modes; nothing to observe then.
    if fs::read_dir(&items).is_ok() {
        return Ok(());
    }

    let output = test.run()?;
    fs::set_permissions(&items, fs::Permissions::from_mode(0o755))?;

    assert_eq!(output.status.code(), Some(13));
    assert_eq!(
        String::from_utf8(output.stderr)?,
        format!(
            "error: cannot open '{}' for reading, permission denied\n",
            items.display()
        )
    );
    assert!(!test.root().join(TEMPLATE_PATH).exists());

    Ok(())
}
