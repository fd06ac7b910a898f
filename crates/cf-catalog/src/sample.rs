//! Built-in demo inventory used when no catalog file is configured.

use crate::vehicle::{BodyType, FuelType, Transmission, VehicleRecord};

#[allow(clippy::too_many_arguments)]
fn record(
    id: u32,
    make: &str,
    model: &str,
    year: u32,
    price: u64,
    mileage: u64,
    fuel_type: FuelType,
    transmission: Transmission,
    body_type: BodyType,
    features: &[&str],
) -> VehicleRecord {
    VehicleRecord {
        id,
        make: make.into(),
        model: model.into(),
        year,
        price,
        mileage,
        fuel_type,
        transmission,
        body_type,
        features: features.iter().map(|f| f.to_string()).collect(),
        image_ref: format!("https://picsum.photos/seed/car{id}/600/400"),
    }
}

/// Twelve listings covering every body and fuel type.
pub fn sample_catalog() -> Vec<VehicleRecord> {
    use BodyType::*;
    use FuelType::*;
    use Transmission::*;

    vec![
        record(
            1,
            "Toyota",
            "RAV4",
            2021,
            28000,
            31000,
            Hybrid,
            Automatic,
            Suv,
            &["safety", "fuel economy", "family-friendly"],
        ),
        record(2, "Honda", "Civic", 2019, 22000, 45000, Gasoline, Manual, Sedan, &["fuel economy"]),
        record(3, "Ford", "F-150", 2020, 35000, 52000, Gasoline, Automatic, Truck, &["off-road"]),
        record(
            4,
            "Tesla",
            "Model 3",
            2022,
            41000,
            18000,
            Electric,
            Automatic,
            Sedan,
            &["luxury", "safety", "fuel economy"],
        ),
        record(
            5,
            "BMW",
            "4 Series Convertible",
            2021,
            52000,
            15000,
            Gasoline,
            Automatic,
            Convertible,
            &["luxury"],
        ),
        record(
            6,
            "Volkswagen",
            "Golf",
            2018,
            16500,
            68000,
            Diesel,
            Manual,
            Hatchback,
            &["fuel economy"],
        ),
        record(7, "Jeep", "Wrangler", 2020, 33000, 40000, Gasoline, Manual, Suv, &["off-road"]),
        record(
            8,
            "Toyota",
            "Camry",
            2022,
            27000,
            21000,
            Hybrid,
            Automatic,
            Sedan,
            &["safety", "fuel economy"],
        ),
        record(9, "Ford", "Mustang", 2019, 30000, 36000, Gasoline, Manual, Coupe, &["luxury"]),
        record(
            10,
            "Volvo",
            "XC90",
            2021,
            49000,
            26000,
            Hybrid,
            Automatic,
            Suv,
            &["luxury", "safety", "family-friendly"],
        ),
        record(
            11,
            "Chevrolet",
            "Silverado",
            2018,
            29500,
            75000,
            Diesel,
            Automatic,
            Truck,
            &["off-road"],
        ),
        record(
            12,
            "Honda",
            "CR-V",
            2023,
            34000,
            8000,
            Gasoline,
            Automatic,
            Suv,
            &["safety", "family-friendly"],
        ),
    ]
}
