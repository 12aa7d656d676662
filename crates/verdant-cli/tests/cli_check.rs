#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).expect("create dirs");
    fs::write(path, content).expect("write fixture");
}

fn write_complete_project(root: &Path) {
    write(
        root,
        "src/mock/plantData.js",
        "export const mockPlants = [{ id: 1, name: 'Aloe', category: 'succulents', family: 'Asphodelaceae', image: 'aloe.png' }];\n\
         export const mockPlantDetails = { aloe: { water: 'monthly' } };\n\
         export const mockRecognitionResults = [];\n\
         export const reminderTypes = ['water'];\n",
    );
    for component in ["ImageUploader", "PlantCard", "LoadingState"] {
        write(root, &format!("src/components/{component}.jsx"), "export default null;\n");
    }
    write(root, "src/pages/HomePage.jsx", "navigate onClick");
    write(root, "src/pages/SearchPage.jsx", "onSearch onChange");
    write(
        root,
        "src/pages/RecognitionPage.jsx",
        "startRecognition handleImageSelect",
    );
    write(root, "src/pages/ReminderPage.jsx", "addReminder deleteReminder");
    write(root, "src/pages/PlantDetailPage.jsx", "useParams useNavigate");
    write(
        root,
        "src/App.jsx",
        "/home /search /recognition /reminder /plant/:id",
    );
    write(
        root,
        "src/index.css",
        ".plant-card{} .search-box{} .recognition-page{} .reminder-page{} .plant-detail-page{}",
    );
}

fn verdant() -> Command {
    let mut cmd = Command::cargo_bin("verdant").expect("cargo bin");
    cmd.env_remove("VERDANT_ROOT");
    cmd
}

#[test]
fn complete_project_reports_all_passes() {
    let temp = tempdir().expect("tempdir");
    write_complete_project(temp.path());

    verdant()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("🌱 Plant encyclopedia structural check started"))
        .stdout(predicate::str::contains("✅ Plant records: 1 records"))
        .stdout(predicate::str::contains("✅ All required routes configured"))
        .stdout(predicate::str::contains("✅ PlantDetailPage handler logic complete"))
        .stdout(predicate::str::contains("\n❌").not());
}

#[test]
fn failures_do_not_change_exit_code_by_default() {
    let temp = tempdir().expect("tempdir");
    write_complete_project(temp.path());
    fs::remove_file(temp.path().join("src/mock/plantData.js")).unwrap();

    verdant()
        .current_dir(temp.path())
        .assert()
        .code(0)
        .stdout(predicate::str::contains(
            "❌ Mock data failed to load: failed to read src/mock/plantData.js",
        ))
        .stdout(predicate::str::contains("✅ All required styles defined"))
        .stdout(predicate::str::contains("🎉 Plant encyclopedia structural check complete!"));
}

#[test]
fn strict_mode_exits_one_on_failure() {
    let temp = tempdir().expect("tempdir");
    write_complete_project(temp.path());
    write(temp.path(), "src/index.css", ".plant-card{} .recognition-page{} .reminder-page{}");

    verdant()
        .arg("--root")
        .arg(temp.path())
        .arg("--strict")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "❌ Missing styles: .search-box, .plant-detail-page",
        ));
}

#[test]
fn strict_mode_exits_zero_when_clean() {
    let temp = tempdir().expect("tempdir");
    write_complete_project(temp.path());

    verdant()
        .env("VERDANT_ROOT", temp.path())
        .arg("--strict")
        .assert()
        .success();
}

#[test]
fn sections_lists_registry() {
    verdant()
        .arg("sections")
        .assert()
        .success()
        .stdout(predicate::str::contains("4. 🛣️ Route configuration (routes)"))
        .stdout(predicate::str::contains("     src/index.css"));
}
