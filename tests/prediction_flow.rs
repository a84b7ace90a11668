mod support;

use support::placement_env::PlacementEnvGuard;

use placement::{
    app_dirs::APP_DIR_NAME,
    config::{self, AppConfig, CONFIG_FILE_NAME},
    egui_app::controller::EguiController,
    form::{BinaryChoice, FormState},
    ml,
    navigation::PageId,
    schema::field_index,
};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

struct AppHarness {
    _config: PlacementEnvGuard,
    _temp: TempDir,
    pub controller: EguiController,
}

impl AppHarness {
    fn with_bundled_model() -> Self {
        let temp = tempfile::tempdir().expect("create tempdir");
        let env = PlacementEnvGuard::set_config_home(temp.path().to_path_buf());
        let app_dir = temp.path().join(APP_DIR_NAME);
        std::fs::create_dir_all(&app_dir).expect("create app dir");

        let settings = AppConfig {
            model_path: bundled_model_path(),
            background_image: None,
            ..AppConfig::default()
        };
        config::save_to_path(&settings, &app_dir.join(CONFIG_FILE_NAME)).expect("write config");

        let loaded = config::load_or_create().expect("load config");
        assert_eq!(loaded.model_path, bundled_model_path());
        let model = ml::load_classifier(&loaded.model_path).expect("load model");
        let controller = EguiController::new(Box::new(model), "bundled");

        Self {
            _config: env,
            _temp: temp,
            controller,
        }
    }
}

fn bundled_model_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/model.json")
}

fn fill(form: &mut FormState, numeric: [(&str, &str); 8], extracurricular: BinaryChoice) {
    for (name, text) in numeric {
        assert!(form.set_text(field_index(name).unwrap(), text));
    }
    form.set_choice(
        field_index("Extracurricular Activities").unwrap(),
        extracurricular,
    );
}

#[test]
fn strong_student_is_likely_placed_with_bundled_model() {
    let mut harness = AppHarness::with_bundled_model();
    let controller = &mut harness.controller;
    assert_eq!(controller.active_page(), PageId::Home);
    controller.show_page(PageId::PredictForm);

    fill(
        controller.form_mut(),
        [
            ("CGPA", "8.5"),
            ("Internships", "2"),
            ("Projects", "3"),
            ("Workshops/Certifications", "1"),
            ("Aptitude Test Score", "75"),
            ("Soft Skills Rating", "4.2"),
            ("SSC Marks", "88"),
            ("HSC Marks", "90"),
        ],
        BinaryChoice::Yes,
    );
    controller.submit_prediction();
    assert!(!controller.ui.error.open);
    assert!(controller.result_text().contains("Likely to be Placed"));

    controller.show_page(PageId::Home);
    assert!(controller.is_page_visible(PageId::Home));
    assert!(!controller.is_page_visible(PageId::PredictForm));
}

#[test]
fn weak_student_is_unlikely_placed_with_bundled_model() {
    let mut harness = AppHarness::with_bundled_model();
    let controller = &mut harness.controller;
    controller.show_page(PageId::PredictForm);
    fill(
        controller.form_mut(),
        [
            ("CGPA", "6.0"),
            ("Internships", "0"),
            ("Projects", "1"),
            ("Workshops/Certifications", "0"),
            ("Aptitude Test Score", "60"),
            ("Soft Skills Rating", "3.0"),
            ("SSC Marks", "55"),
            ("HSC Marks", "57"),
        ],
        BinaryChoice::No,
    );
    controller.submit_prediction();
    assert_eq!(controller.result_text(), "Student is Unlikely to be Placed");
}

#[test]
fn nan_input_is_rejected_by_the_model() {
    let mut harness = AppHarness::with_bundled_model();
    let controller = &mut harness.controller;
    fill(
        controller.form_mut(),
        [
            ("CGPA", "nan"),
            ("Internships", "0"),
            ("Projects", "1"),
            ("Workshops/Certifications", "0"),
            ("Aptitude Test Score", "60"),
            ("Soft Skills Rating", "3.0"),
            ("SSC Marks", "55"),
            ("HSC Marks", "57"),
        ],
        BinaryChoice::No,
    );
    controller.submit_prediction();
    assert!(controller.ui.error.open);
    assert_eq!(
        controller.ui.error.message,
        "Invalid input: input contains NaN or infinity"
    );
    assert_eq!(controller.result_text(), "");
}

#[test]
fn first_launch_creates_default_config() {
    let temp = tempfile::tempdir().expect("create tempdir");
    let _env = PlacementEnvGuard::set_config_home(temp.path().to_path_buf());
    let loaded = config::load_or_create().expect("load config");
    assert_eq!(loaded, AppConfig::default());
    assert!(
        temp.path()
            .join(APP_DIR_NAME)
            .join(CONFIG_FILE_NAME)
            .is_file()
    );
}
