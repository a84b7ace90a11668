use super::*;
use crate::egui_app::ui::style;
use crate::form::BinaryChoice;
use crate::ml::{ClassLabel, InferenceError};
use crate::schema::{FeatureVector, field_index};
use std::cell::Cell;
use std::rc::Rc;

struct CountingClassifier {
    label: ClassLabel,
    calls: Rc<Cell<usize>>,
}

impl Classifier for CountingClassifier {
    fn predict(&self, _features: &FeatureVector) -> Result<ClassLabel, InferenceError> {
        self.calls.set(self.calls.get() + 1);
        Ok(self.label)
    }
}

fn controller_with_label(label: ClassLabel) -> (EguiController, Rc<Cell<usize>>) {
    let calls = Rc::new(Cell::new(0));
    let classifier = CountingClassifier {
        label,
        calls: calls.clone(),
    };
    (EguiController::new(Box::new(classifier), "test model"), calls)
}

fn fill_form(form: &mut FormState) {
    for (idx, text) in [
        (0, "8.5"),
        (1, "2"),
        (2, "3"),
        (3, "1"),
        (4, "75"),
        (5, "4.2"),
        (8, "88"),
        (9, "90"),
    ] {
        form.set_text(idx, text);
    }
    form.set_choice(6, BinaryChoice::Yes);
}

#[test]
fn starts_on_home_page() {
    let (controller, _) = controller_with_label(1);
    assert_eq!(controller.active_page(), PageId::Home);
    assert!(controller.is_page_visible(PageId::Home));
    assert!(!controller.is_page_visible(PageId::PredictForm));
    assert!(controller.ui.status.text.contains("test model"));
}

#[test]
fn page_requests_switch_visibility() {
    let (mut controller, _) = controller_with_label(1);
    controller.request_page(PageId::PredictForm);
    assert!(controller.is_page_visible(PageId::PredictForm));
    assert!(!controller.is_page_visible(PageId::Home));

    controller.request_page(PageId::Home);
    assert_eq!(controller.active_page(), PageId::Home);
    assert!(!controller.is_page_visible(PageId::PredictForm));
}

#[test]
fn successful_submission_updates_result_and_status() {
    let (mut controller, calls) = controller_with_label(1);
    controller.show_page(PageId::PredictForm);
    fill_form(controller.form_mut());

    controller.submit_prediction();
    assert_eq!(calls.get(), 1);
    assert_eq!(controller.result_text(), "Student is Likely to be Placed");
    assert!(!controller.ui.error.open);
    assert_eq!(
        controller.ui.status.badge_color,
        style::status_badge_color(StatusTone::Info)
    );
}

#[test]
fn blank_field_opens_error_modal_without_inference() {
    let (mut controller, calls) = controller_with_label(1);
    fill_form(controller.form_mut());
    let aptitude = field_index("Aptitude Test Score").unwrap();
    controller.form_mut().set_text(aptitude, " ");

    controller.submit_prediction();
    assert_eq!(calls.get(), 0);
    assert!(controller.ui.error.open);
    assert_eq!(
        controller.ui.error.message,
        "Invalid input: Aptitude Test Score is empty"
    );
    assert_eq!(controller.result_text(), "");
}

#[test]
fn error_leaves_previous_result_and_can_be_dismissed() {
    let (mut controller, calls) = controller_with_label(0);
    fill_form(controller.form_mut());
    controller.submit_prediction();
    assert_eq!(controller.result_text(), "Student is Unlikely to be Placed");

    controller.form_mut().set_text(0, "eight");
    controller.submit_prediction();
    assert_eq!(calls.get(), 1);
    assert!(controller.ui.error.open);
    assert_eq!(controller.result_text(), "Student is Unlikely to be Placed");

    controller.dismiss_error();
    assert!(!controller.ui.error.open);
    assert!(controller.ui.error.message.is_empty());
}

#[test]
fn form_survives_navigation() {
    let (mut controller, _) = controller_with_label(1);
    controller.show_page(PageId::PredictForm);
    controller.form_mut().set_text(0, "9.1");
    controller.show_page(PageId::Home);
    controller.show_page(PageId::PredictForm);
    assert_eq!(
        controller.form().value(0),
        Some(&crate::form::FieldValue::Text("9.1".into()))
    );
}
