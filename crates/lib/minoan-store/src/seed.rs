//! Sample furniture and décor rows inserted into an empty catalog.

use crate::models::NewProduct;

struct SeedRow {
    name: &'static str,
    description: &'static str,
    category: &'static str,
    price: f64,
    material: &'static str,
    color: &'static str,
    dimensions: &'static str,
    image: &'static str,
    in_stock: bool,
}

const SEED_ROWS: [SeedRow; 10] = [
    SeedRow {
        name: "Modern Velvet Sofa",
        description: "Three-seat sofa upholstered in soft velvet with tapered brass legs.",
        category: "Seating",
        price: 1299.0,
        material: "Velvet, brass",
        color: "Emerald green",
        dimensions: "84\" W x 36\" D x 32\" H",
        image: "modern-velvet-sofa.jpg",
        in_stock: true,
    },
    SeedRow {
        name: "Scandinavian Dining Table",
        description: "Solid oak dining table with a clean, minimalist profile that seats six.",
        category: "Tables",
        price: 900.0,
        material: "Oak",
        color: "Natural",
        dimensions: "72\" W x 36\" D x 30\" H",
        image: "scandinavian-dining-table.jpg",
        in_stock: true,
    },
    SeedRow {
        name: "Industrial Floor Lamp",
        description: "Adjustable floor lamp with an exposed-bulb cage shade.",
        category: "Lighting",
        price: 249.0,
        material: "Iron",
        color: "Matte black",
        dimensions: "12\" W x 12\" D x 64\" H",
        image: "industrial-floor-lamp.jpg",
        in_stock: true,
    },
    SeedRow {
        name: "Bohemian Area Rug",
        description: "Hand-woven rug with a faded geometric pattern.",
        category: "Rugs",
        price: 500.0,
        material: "Wool, cotton",
        color: "Terracotta",
        dimensions: "8' x 10'",
        image: "bohemian-area-rug.jpg",
        in_stock: true,
    },
    SeedRow {
        name: "Mid-Century Armchair",
        description: "Walnut-framed lounge chair with a curved back and tufted cushion.",
        category: "Seating",
        price: 649.0,
        material: "Walnut, linen",
        color: "Mustard",
        dimensions: "30\" W x 32\" D x 31\" H",
        image: "mid-century-armchair.jpg",
        in_stock: true,
    },
    SeedRow {
        name: "Marble Coffee Table",
        description: "Round coffee table with a Carrara marble top on a fluted base.",
        category: "Tables",
        price: 749.0,
        material: "Marble",
        color: "White",
        dimensions: "36\" Dia x 16\" H",
        image: "marble-coffee-table.jpg",
        in_stock: false,
    },
    SeedRow {
        name: "Ceramic Vase Set",
        description: "Set of three stoneware vases in graduated sizes.",
        category: "Decor",
        price: 89.0,
        material: "Stoneware",
        color: "Sand",
        dimensions: "6\" to 12\" H",
        image: "ceramic-vase-set.jpg",
        in_stock: true,
    },
    SeedRow {
        name: "Platform Bed Frame",
        description: "Low-profile queen platform bed with an integrated headboard.",
        category: "Bedroom",
        price: 999.0,
        material: "Ash",
        color: "Walnut stain",
        dimensions: "64\" W x 86\" D x 38\" H",
        image: "platform-bed-frame.jpg",
        in_stock: true,
    },
    SeedRow {
        name: "Rattan Pendant Light",
        description: "Woven rattan pendant that casts a warm, patterned glow.",
        category: "Lighting",
        price: 179.0,
        material: "Rattan",
        color: "Natural",
        dimensions: "18\" Dia x 14\" H",
        image: "rattan-pendant-light.jpg",
        in_stock: true,
    },
    SeedRow {
        name: "Abstract Wall Art",
        description: "Framed canvas print with layered earth-tone brushwork.",
        category: "Decor",
        price: 299.0,
        material: "Canvas, pine frame",
        color: "Earth tones",
        dimensions: "36\" W x 48\" H",
        image: "abstract-wall-art.jpg",
        in_stock: true,
    },
];

const IMAGE_BASE_URL: &str = "https://images.minoan.example/products/";

/// Returns the fixed sample catalog.
#[must_use]
pub fn sample_products() -> Vec<NewProduct> {
    SEED_ROWS
        .iter()
        .map(|row| NewProduct {
            name: row.name.to_string(),
            description: row.description.to_string(),
            category: row.category.to_string(),
            price: row.price,
            material: Some(row.material.to_string()),
            color: Some(row.color.to_string()),
            dimensions: Some(row.dimensions.to_string()),
            image_url: Some(format!("{IMAGE_BASE_URL}{}", row.image)),
            in_stock: row.in_stock,
        })
        .collect()
}
