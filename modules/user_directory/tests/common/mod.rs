#![allow(dead_code)]

use user_directory::model::{Dob, Location, Name, User};

pub fn make_user(first: &str, last: &str, email: &str) -> User {
    User {
        gender: Some("female".to_string()),
        name: Name {
            title: Some("Ms".to_string()),
            first: Some(first.to_string()),
            last: Some(last.to_string()),
        },
        email: Some(email.to_string()),
        phone: Some("555-0100".to_string()),
        ..Default::default()
    }
}

pub fn with_age(mut user: User, age: u32) -> User {
    user.dob = Some(Dob {
        date: Some("1990-01-01T00:00:00.000Z".to_string()),
        age: Some(age),
    });
    user
}

pub fn with_country(mut user: User, country: &str) -> User {
    user.location = Some(Location {
        country: Some(country.to_string()),
        ..Default::default()
    });
    user
}

/// `n` distinct users named `user{i}` with emails `user{i}@example.com`.
pub fn numbered_users(n: usize) -> Vec<User> {
    (0..n)
        .map(|i| make_user(&format!("user{i}"), "Numbered", &format!("user{i}@example.com")))
        .collect()
}

pub fn first_names<'a>(users: impl IntoIterator<Item = &'a User>) -> Vec<String> {
    users.into_iter().map(|u| u.first_name().to_string()).collect()
}

pub const USERS_DOCUMENT: &str = r#"{
  "results": [
    {
      "gender": "male",
      "name": { "title": "Mr", "first": "John", "last": "Smith" },
      "location": {
        "street": { "number": 4321, "name": "Main St" },
        "city": "Dunedin",
        "state": "Otago",
        "country": "New Zealand",
        "postcode": 90210
      },
      "email": "john.smith@example.com",
      "login": { "uuid": "ignored" },
      "dob": { "date": "1980-03-01T10:00:00.000Z", "age": 44 },
      "phone": "(123)-456-7890",
      "cell": "ignored",
      "picture": {
        "large": "https://img.example/l/1.jpg",
        "medium": "https://img.example/m/1.jpg",
        "thumbnail": "https://img.example/t/1.jpg"
      }
    },
    {
      "gender": "female",
      "name": { "title": "Ms", "first": "Léa", "last": "Roux" },
      "location": {
        "street": { "number": 12, "name": "Rue Verte" },
        "city": "Lyon",
        "state": "Rhône",
        "country": "France",
        "postcode": "69001"
      },
      "email": "smithers.lea@example.com",
      "dob": { "date": "1995-07-21T08:00:00.000Z", "age": 29 },
      "phone": "04-12-34-56-78",
      "picture": {
        "large": "https://img.example/l/2.jpg",
        "medium": "https://img.example/m/2.jpg",
        "thumbnail": "https://img.example/t/2.jpg"
      }
    },
    {
      "gender": "female",
      "name": { "title": "Dr", "first": "Ana", "last": "Silva" },
      "email": "ana.silva@example.com",
      "phone": "11-5555-0000"
    }
  ],
  "info": { "seed": "abc", "results": 3, "page": 1 }
}"#;
