use workman_gh::core::profile::{send_job_request, toggle_availability};
use workman_gh::core::registration::{register, DEFAULT_MIN_PHONE_DIGITS};
use workman_gh::domain::model::RegistrationForm;
use workman_gh::domain::sample_data::sample_artisans;
use workman_gh::{Category, DirectoryError};

fn form(phone: &str) -> RegistrationForm {
    RegistrationForm {
        name: "Nana Addo".to_string(),
        phone: phone.to_string(),
        category: Some(Category::Mechanic),
        experience: "11".to_string(),
        bio: String::new(),
    }
}

#[test]
fn test_five_digit_phone_is_rejected() {
    let err = register(&form("12345"), DEFAULT_MIN_PHONE_DIGITS).unwrap_err();

    assert!(matches!(err, DirectoryError::InvalidPhone { .. }));
    assert!(err.user_friendly_message().starts_with("Invalid Phone"));
    assert_eq!(err.field(), Some("phone"));
}

#[test]
fn test_ghana_number_is_accepted() {
    let registration = register(&form("+233 24 412 3456"), DEFAULT_MIN_PHONE_DIGITS).unwrap();

    assert_eq!(registration.candidate.category, Category::Mechanic);
    assert_eq!(registration.candidate.experience, 11);
    assert!(registration.message.contains("Nana Addo"));
    assert!(registration.message.contains("Mechanic"));
}

#[test]
fn test_empty_form_names_every_field() {
    let err = register(&RegistrationForm::default(), DEFAULT_MIN_PHONE_DIGITS).unwrap_err();
    match err {
        DirectoryError::MissingFields { fields } => {
            assert_eq!(fields, vec!["name", "phone", "category", "experience"]);
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_availability_is_session_local() {
    let artisans = sample_artisans();
    let updated = toggle_availability(artisans[0].clone());

    assert!(!updated.artisan.available);
    assert!(artisans[0].available);
    assert!(sample_artisans()[0].available);

    let err = send_job_request(&updated.artisan).unwrap_err();
    assert!(matches!(err, DirectoryError::ArtisanUnavailable { .. }));
}
