use crate::domain::model::{Artisan, Category, Location};

struct Seed {
    id: &'static str,
    name: &'static str,
    category: Category,
    phone: &'static str,
    experience: u32,
    rating: f32,
    review_count: u32,
    latitude: f64,
    longitude: f64,
    address: &'static str,
    available: bool,
    bio: &'static str,
}

const SEEDS: [Seed; 8] = [
    Seed {
        id: "1",
        name: "Kwame Mensah",
        category: Category::Plumber,
        phone: "+233244123456",
        experience: 8,
        rating: 4.7,
        review_count: 45,
        latitude: 5.6037,
        longitude: -0.1870,
        address: "Accra, Greater Accra",
        available: true,
        bio: "Expert plumber with 8 years experience in residential and commercial plumbing.",
    },
    Seed {
        id: "2",
        name: "Akosua Boateng",
        category: Category::Electrician,
        phone: "+233244234567",
        experience: 5,
        rating: 4.9,
        review_count: 62,
        latitude: 5.6100,
        longitude: -0.1900,
        address: "East Legon, Accra",
        available: true,
        bio: "Certified electrician specializing in home wiring and electrical repairs.",
    },
    Seed {
        id: "3",
        name: "Kofi Asante",
        category: Category::Carpenter,
        phone: "+233244345678",
        experience: 12,
        rating: 4.8,
        review_count: 89,
        latitude: 5.5950,
        longitude: -0.1800,
        address: "Osu, Accra",
        available: false,
        bio: "Master carpenter specializing in furniture making and home renovations.",
    },
    Seed {
        id: "4",
        name: "Ama Adusei",
        category: Category::Painter,
        phone: "+233244456789",
        experience: 6,
        rating: 4.6,
        review_count: 34,
        latitude: 5.6000,
        longitude: -0.1950,
        address: "Tema, Greater Accra",
        available: true,
        bio: "Professional painter with expertise in interior and exterior painting.",
    },
    Seed {
        id: "5",
        name: "Yaw Darko",
        category: Category::Mason,
        phone: "+233244567890",
        experience: 10,
        rating: 4.5,
        review_count: 56,
        latitude: 5.6080,
        longitude: -0.1920,
        address: "Madina, Accra",
        available: true,
        bio: "Experienced mason specializing in building construction and block laying.",
    },
    Seed {
        id: "6",
        name: "Abena Owusu",
        category: Category::Tiler,
        phone: "+233244678901",
        experience: 7,
        rating: 4.8,
        review_count: 41,
        latitude: 5.5980,
        longitude: -0.1880,
        address: "Labadi, Accra",
        available: true,
        bio: "Expert tiler with 7 years experience in floor and wall tiling.",
    },
    Seed {
        id: "7",
        name: "Kwabena Nkrumah",
        category: Category::Welder,
        phone: "+233244789012",
        experience: 9,
        rating: 4.7,
        review_count: 38,
        latitude: 5.6020,
        longitude: -0.1850,
        address: "Adabraka, Accra",
        available: true,
        bio: "Professional welder specializing in metal fabrication and repairs.",
    },
    Seed {
        id: "8",
        name: "Efua Mensah",
        category: Category::Plumber,
        phone: "+233244890123",
        experience: 4,
        rating: 4.4,
        review_count: 28,
        latitude: 5.6060,
        longitude: -0.1910,
        address: "Achimota, Accra",
        available: true,
        bio: "Reliable plumber for all your plumbing needs.",
    },
];

/// The built-in directory contents.
pub fn sample_artisans() -> Vec<Artisan> {
    SEEDS
        .iter()
        .map(|seed| Artisan {
            id: seed.id.to_string(),
            name: seed.name.to_string(),
            category: seed.category,
            phone: seed.phone.to_string(),
            experience: seed.experience,
            rating: seed.rating,
            review_count: seed.review_count,
            location: Location {
                latitude: seed.latitude,
                longitude: seed.longitude,
                address: seed.address.to_string(),
            },
            available: seed.available,
            profile_photo: None,
            portfolio: Vec::new(),
            bio: seed.bio.to_string(),
        })
        .collect()
}
