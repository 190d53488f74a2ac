use crate::models::candidate::Candidate;
use crate::models::class::BerkeleyClass;
use crate::models::office_hour::OfficeHour;
use crate::models::officer::Officer;
use crate::models::requirement::Requirement;
use crate::models::user::User;

pub fn mock_user() -> User {
    User {
        id: 1,
        username: String::from("ghopper"),
        first_name: String::from("Grace"),
        last_name: String::from("Hopper"),
    }
}

pub fn mock_candidate() -> Candidate {
    Candidate {
        id: 1,
        user_id: mock_user().id,
        family: String::from("Turing"),
        committee: String::from("Outreach"),
    }
}

pub fn mock_officer() -> Officer {
    Officer {
        id: 1,
        user_id: mock_user().id,
        year_in_school: String::from("SR"),
        phone_number: String::from("5105550123"),
        position: 1,
        photo: None,
    }
}

pub fn mock_office_hour(id: i64, day_of_week: i32, hour: i32) -> OfficeHour {
    OfficeHour {
        id,
        day_of_week,
        hour,
    }
}

pub fn mock_class(id: i64, class_name: i32) -> BerkeleyClass {
    BerkeleyClass { id, class_name }
}

pub fn mock_requirement() -> Requirement {
    Requirement {
        id: 1,
        name: String::from("Fall Social"),
        description: Some(String::from("Attend at least one social event")),
        req_type: String::from("SOC"),
    }
}
