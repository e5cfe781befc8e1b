//! Static catalog loaded by the seed routine.

use models::product::NewProduct;

use crate::products::CreateProduct;

struct SeedProduct {
    title: &'static str,
    slug: &'static str,
    description: &'static str,
    price: f64,
    stock: i32,
    sizes: &'static [&'static str],
    gender: &'static str,
    tags: &'static [&'static str],
    images: &'static [&'static str],
}

static SEED_PRODUCTS: &[SeedProduct] = &[
    SeedProduct {
        title: "Men's Chill Crew Neck Sweatshirt",
        slug: "mens_chill_crew_neck_sweatshirt",
        description: "Heavyweight fleece crew neck with a relaxed fit and ribbed cuffs.",
        price: 75.0,
        stock: 7,
        sizes: &["XS", "S", "M", "L", "XL", "XXL"],
        gender: "men",
        tags: &["sweatshirt"],
        images: &["1740176-00-A_0_2000.jpg", "1740176-00-A_1.jpg"],
    },
    SeedProduct {
        title: "Men's Quilted Shirt Jacket",
        slug: "mens_quilted_shirt_jacket",
        description: "Diamond-quilted overshirt with snap front and two chest pockets.",
        price: 200.0,
        stock: 5,
        sizes: &["XS", "S", "M", "XL", "XXL"],
        gender: "men",
        tags: &["jacket"],
        images: &["1740507-00-A_0_2000.jpg", "1740507-00-A_1.jpg"],
    },
    SeedProduct {
        title: "Men's Raven Lightweight Zip Up Bomber Jacket",
        slug: "mens_raven_lightweight_zip_up_bomber_jacket",
        description: "Water-resistant shell bomber with a full zip and ribbed hem.",
        price: 130.0,
        stock: 10,
        sizes: &["S", "M", "L", "XL", "XXL"],
        gender: "men",
        tags: &["shirt"],
        images: &["1740250-00-A_0_2000.jpg", "1740250-00-A_1.jpg"],
    },
    SeedProduct {
        title: "Men's Turbine Long Sleeve Tee",
        slug: "mens_turbine_long_sleeve_tee",
        description: "Long sleeve cotton tee with a subtle chest print.",
        price: 45.0,
        stock: 50,
        sizes: &["XS", "S", "M", "L"],
        gender: "men",
        tags: &["shirt"],
        images: &["1740280-00-A_0_2000.jpg", "1740280-00-A_1.jpg"],
    },
    SeedProduct {
        title: "Men's Turbine Short Sleeve Tee",
        slug: "mens_turbine_short_sleeve_tee",
        description: "Short sleeve cotton tee with a subtle chest print.",
        price: 40.0,
        stock: 50,
        sizes: &["M", "L", "XL", "XXL"],
        gender: "men",
        tags: &["shirt"],
        images: &["1741416-00-A_0_2000.jpg", "1741416-00-A_1.jpg"],
    },
    SeedProduct {
        title: "Men's Cybertruck Owl Tee",
        slug: "mens_cybertruck_owl_tee",
        description: "Graphic tee in premium cotton, printed front and back.",
        price: 35.0,
        stock: 0,
        sizes: &["M", "L", "XL", "XXL"],
        gender: "men",
        tags: &["shirt"],
        images: &["7654393-00-A_2_2000.jpg", "7654393-00-A_3.jpg"],
    },
    SeedProduct {
        title: "Women's Cropped Puffer Jacket",
        slug: "womens_cropped_puffer_jacket",
        description: "Cropped puffer with a stand collar and hand pockets.",
        price: 225.0,
        stock: 85,
        sizes: &["XS", "S", "M"],
        gender: "women",
        tags: &["hoodie"],
        images: &["1740535-00-A_0_2000.jpg", "1740535-00-A_1.jpg"],
    },
    SeedProduct {
        title: "Women's Chill Half Zip Cropped Hoodie",
        slug: "womens_chill_half_zip_cropped_hoodie",
        description: "Half zip fleece hoodie with a cropped hem and kangaroo pocket.",
        price: 130.0,
        stock: 10,
        sizes: &["XS", "S", "M", "L", "XL", "XXL"],
        gender: "women",
        tags: &["hoodie"],
        images: &["1740226-00-A_0_2000.jpg", "1740226-00-A_1.jpg"],
    },
    SeedProduct {
        title: "Women's Raven Slouchy Crew Sweatshirt",
        slug: "womens_raven_slouchy_crew_sweatshirt",
        description: "Oversized crew sweatshirt with dropped shoulders.",
        price: 110.0,
        stock: 9,
        sizes: &["XS", "S", "M", "L", "XL", "XXL"],
        gender: "women",
        tags: &["hoodie"],
        images: &["1740260-00-A_0_2000.jpg", "1740260-00-A_1.jpg"],
    },
    SeedProduct {
        title: "Women's Turbine Cropped Long Sleeve Tee",
        slug: "womens_turbine_cropped_long_sleeve_tee",
        description: "Cropped long sleeve tee in a soft cotton blend.",
        price: 45.0,
        stock: 10,
        sizes: &["XS", "S", "M", "L", "XL", "XXL"],
        gender: "women",
        tags: &["shirt"],
        images: &["1740290-00-A_0_2000.jpg", "1740290-00-A_1.jpg"],
    },
    SeedProduct {
        title: "Women's Made on Earth by Humans Tee",
        slug: "womens_made_on_earth_by_humans_tee",
        description: "Relaxed fit tee with a slogan print on the back.",
        price: 35.0,
        stock: 15,
        sizes: &["XS", "S", "M", "L"],
        gender: "women",
        tags: &["shirt"],
        images: &["8765120-00-A_0_2000.jpg", "8765120-00-A_1.jpg"],
    },
    SeedProduct {
        title: "Kids Cybertruck Long Sleeve Tee",
        slug: "kids_cybertruck_long_sleeve_tee",
        description: "Long sleeve cotton tee for kids with a tonal graphic.",
        price: 30.0,
        stock: 10,
        sizes: &["XS", "S", "M"],
        gender: "kid",
        tags: &["shirt"],
        images: &["1742693-00-A_1_2000.jpg", "1742693-00-A_3.jpg"],
    },
    SeedProduct {
        title: "Kids Scribble T Logo Tee",
        slug: "kids_scribble_t_logo_tee",
        description: "Short sleeve tee for kids with a hand-drawn logo.",
        price: 25.0,
        stock: 0,
        sizes: &["XS", "S", "M"],
        gender: "kid",
        tags: &["shirt"],
        images: &["8529312-00-A_0_2000.jpg", "8529312-00-A_1.jpg"],
    },
    SeedProduct {
        title: "Kids Racing Stripe Tee",
        slug: "kids_racing_stripe_tee",
        description: "Kids tee with a racing stripe across the chest.",
        price: 30.0,
        stock: 10,
        sizes: &["XS", "S", "M"],
        gender: "kid",
        tags: &["shirt"],
        images: &["1742691-00-A_0_2000.jpg", "1742691-00-A_1.jpg"],
    },
    SeedProduct {
        title: "Relaxed T Logo Hat",
        slug: "relaxed_t_logo_hat",
        description: "Unstructured six-panel cap with an embroidered logo.",
        price: 30.0,
        stock: 10,
        sizes: &[],
        gender: "unisex",
        tags: &["hats"],
        images: &["1657932-00-A_0_2000.jpg", "1657932-00-A_1.jpg"],
    },
    SeedProduct {
        title: "Thermal Cuffed Beanie",
        slug: "thermal_cuffed_beanie",
        description: "Rib knit beanie with a fold-over cuff.",
        price: 35.0,
        stock: 10,
        sizes: &[],
        gender: "unisex",
        tags: &["hats"],
        images: &["1740417-00-A_0_2000.jpg", "1740417-00-A_1.jpg"],
    },
];

impl From<&SeedProduct> for CreateProduct {
    fn from(p: &SeedProduct) -> Self {
        CreateProduct {
            details: NewProduct {
                title: p.title.to_string(),
                price: Some(p.price),
                description: Some(p.description.to_string()),
                slug: Some(p.slug.to_string()),
                stock: Some(p.stock),
                sizes: p.sizes.iter().map(|s| s.to_string()).collect(),
                gender: p.gender.to_string(),
                tags: p.tags.iter().map(|s| s.to_string()).collect(),
            },
            images: p.images.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// The seed dataset as create inputs.
pub fn initial_products() -> Vec<CreateProduct> {
    SEED_PRODUCTS.iter().map(CreateProduct::from).collect()
}
