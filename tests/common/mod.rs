//! Shared test fixtures and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use charview::api::{Character, ImageSource};
use std::net::TcpListener;

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

pub fn character(id: i64, name: &str, status: &str, gender: &str) -> Character {
    Character {
        id,
        name: name.to_string(),
        status: status.to_string(),
        gender: gender.to_string(),
        image: ImageSource::Url(format!(
            "https://rickandmortyapi.com/api/character/avatar/{id}.jpeg"
        )),
    }
}

/// Rick and Morty alive and male, Summer dead and female.
pub fn family() -> Vec<Character> {
    vec![
        character(1, "Rick", "Alive", "Male"),
        character(2, "Morty", "Alive", "Male"),
        character(3, "Summer", "Dead", "Female"),
    ]
}

/// A wider list covering every observed status and gender value.
pub fn cast() -> Vec<Character> {
    vec![
        character(1, "Rick Sanchez", "Alive", "Male"),
        character(2, "Morty Smith", "Alive", "Male"),
        character(3, "Summer Smith", "Alive", "Female"),
        character(4, "Beth Smith", "Alive", "Female"),
        character(6, "Abadango Cluster Princess", "Alive", "Female"),
        character(8, "Adjudicator Rick", "Dead", "Male"),
        character(9, "Agency Director", "Dead", "Male"),
        character(14, "Alien Morty", "unknown", "Male"),
        character(15, "Alien Rick", "unknown", "Male"),
        character(20, "Ants in my Eyes Johnson", "unknown", "Male"),
        character(24, "Armagheadon", "Alive", "Male"),
        character(27, "Artist Morty", "Alive", "Male"),
        character(30, "Baby Legs", "Alive", "unknown"),
        character(31, "Baby Poopybutthole", "Alive", "Genderless"),
        character(40, "Beth's Mytholog", "Dead", "Female"),
    ]
}

/// JSON envelope as the API sends it, with pagination metadata.
pub fn envelope_json(characters: &[Character]) -> String {
    let results: Vec<serde_json::Value> = characters
        .iter()
        .map(|c| {
            serde_json::json!({
                "id": c.id,
                "name": c.name,
                "status": c.status,
                "species": "Human",
                "type": "",
                "gender": c.gender,
                "origin": { "name": "Earth (C-137)", "url": "" },
                "location": { "name": "Citadel of Ricks", "url": "" },
                "image": c.image.src(),
                "episode": [],
                "url": format!("https://rickandmortyapi.com/api/character/{}", c.id),
                "created": "2017-11-04T18:48:46.250Z"
            })
        })
        .collect();
    serde_json::json!({
        "info": { "count": 826, "pages": 42, "next": "https://rickandmortyapi.com/api/character?page=2", "prev": null },
        "results": results
    })
    .to_string()
}
