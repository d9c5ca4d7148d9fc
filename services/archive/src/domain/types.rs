use std::fmt;

use chrono::{DateTime, Utc};

/// Planet climate. Input is matched case-insensitively; the symbolic
/// name is what gets stored and serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Climate {
    Sunny,
    Cloudy,
    Rainy,
    Windy,
    Stormy,
}

impl Climate {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "SUNNY" => Some(Self::Sunny),
            "CLOUDY" => Some(Self::Cloudy),
            "RAINY" => Some(Self::Rainy),
            "WINDY" => Some(Self::Windy),
            "STORMY" => Some(Self::Stormy),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sunny => "SUNNY",
            Self::Cloudy => "CLOUDY",
            Self::Rainy => "RAINY",
            Self::Windy => "WINDY",
            Self::Stormy => "STORMY",
        }
    }
}

/// Character gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "MALE" => Some(Self::Male),
            "FEMALE" => Some(Self::Female),
            "OTHER" => Some(Self::Other),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "MALE",
            Self::Female => "FEMALE",
            Self::Other => "OTHER",
        }
    }
}

/// Vehicle type (serialized under the `type` key).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleType {
    Car,
    Motorcycle,
    Truck,
}

impl VehicleType {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "CAR" => Some(Self::Car),
            "MOTORCYCLE" => Some(Self::Motorcycle),
            "TRUCK" => Some(Self::Truck),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Car => "CAR",
            Self::Motorcycle => "MOTORCYCLE",
            Self::Truck => "TRUCK",
        }
    }
}

/// The three entity kinds a user can favorite. Parameterizes the single
/// favorite-association capability instead of three parallel code paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FavoriteKind {
    Planet,
    Character,
    Vehicle,
}

impl fmt::Display for FavoriteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Planet => "planet",
            Self::Character => "character",
            Self::Vehicle => "vehicle",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone)]
pub struct Planet {
    pub id: i32,
    pub name: String,
    pub size: i32,
    pub climate: Climate,
    pub gravity: bool,
}

/// Planet fields before the store assigns an id.
#[derive(Debug, Clone)]
pub struct NewPlanet {
    pub name: String,
    pub size: i32,
    pub climate: Climate,
    pub gravity: bool,
}

#[derive(Debug, Clone)]
pub struct Character {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub gender: Gender,
}

#[derive(Debug, Clone)]
pub struct NewCharacter {
    pub name: String,
    pub age: i32,
    pub gender: Gender,
}

#[derive(Debug, Clone)]
pub struct Vehicle {
    pub id: i32,
    pub name: String,
    pub cargo_capacity: i32,
    pub model: String,
    pub kind: VehicleType,
}

#[derive(Debug, Clone)]
pub struct NewVehicle {
    pub name: String,
    pub cargo_capacity: i32,
    pub model: String,
    pub kind: VehicleType,
}

/// Registered user. `password` is stored as given and never serialized.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
    pub created_date: DateTime<Utc>,
    pub is_active: bool,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
    pub created_date: DateTime<Utc>,
    pub is_active: bool,
}

/// A user's favorites across all three kinds, as full entities. The
/// reduced name-only projection is derived from this at the handler layer.
#[derive(Debug, Clone, Default)]
pub struct UserFavorites {
    pub planets: Vec<Planet>,
    pub characters: Vec<Character>,
    pub vehicles: Vec<Vehicle>,
}
