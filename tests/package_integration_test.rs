use tempfile::TempDir;
use theme_audit::core::package;
use theme_audit::LocalStorage;

fn write_extension_fixture(dir: &std::path::Path) {
    let manifest = serde_json::json!({
        "name": "toy-chest-theme",
        "version": "1.2.0",
        "displayName": "Toy Chest Theme",
        "contributes": {
            "themes": [
                {
                    "label": "Toy Chest",
                    "uiTheme": "vs-dark",
                    "path": "themes/toy-chest-color-theme.json"
                }
            ]
        }
    });
    std::fs::write(
        dir.join("package.json"),
        serde_json::to_vec_pretty(&manifest).unwrap(),
    )
    .unwrap();

    std::fs::create_dir_all(dir.join("themes")).unwrap();
    let theme = serde_json::json!({
        "name": "Toy Chest",
        "type": "dark",
        "colors": {
            "editor.background": "#23364a",
            "editor.foreground": "#30cf7b"
        }
    });
    std::fs::write(
        dir.join("themes/toy-chest-color-theme.json"),
        serde_json::to_vec_pretty(&theme).unwrap(),
    )
    .unwrap();

    std::fs::write(dir.join("README.md"), "# Toy Chest Theme\n").unwrap();
    std::fs::write(dir.join("CHANGELOG.md"), "## 1.2.0\n").unwrap();
}

#[tokio::test]
async fn test_end_to_end_packaging() {
    let extension_dir = TempDir::new().unwrap();
    write_extension_fixture(extension_dir.path());

    let output_dir = TempDir::new().unwrap();
    let storage = LocalStorage::new(output_dir.path());

    let manifest = package::validate_package(extension_dir.path()).unwrap();
    let archive_name = package::build_package(&storage, extension_dir.path(), &manifest)
        .await
        .unwrap();

    assert_eq!(archive_name, "toy-chest-theme-1.2.0.vsix");

    let archive_path = output_dir.path().join(&archive_name);
    assert!(archive_path.exists());

    let zip_data = std::fs::read(&archive_path).unwrap();
    let cursor = std::io::Cursor::new(zip_data);
    let mut archive = zip::ZipArchive::new(cursor).unwrap();

    let mut names: Vec<String> = (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect();
    names.sort();

    assert_eq!(
        names,
        vec![
            "CHANGELOG.md",
            "README.md",
            "package.json",
            "themes/toy-chest-color-theme.json"
        ]
    );

    // The manifest inside the archive must parse back to the same extension
    let manifest_text = {
        let mut file = archive.by_name("package.json").unwrap();
        let mut content = String::new();
        std::io::Read::read_to_string(&mut file, &mut content).unwrap();
        content
    };
    let parsed: serde_json::Value = serde_json::from_str(&manifest_text).unwrap();
    assert_eq!(parsed["name"], "toy-chest-theme");
    assert_eq!(parsed["version"], "1.2.0");
}

#[tokio::test]
async fn test_packaging_rejects_incomplete_extension() {
    let extension_dir = TempDir::new().unwrap();
    write_extension_fixture(extension_dir.path());
    std::fs::remove_file(extension_dir.path().join("README.md")).unwrap();

    let err = package::validate_package(extension_dir.path()).unwrap_err();
    assert!(err.to_string().contains("README.md"));
}
