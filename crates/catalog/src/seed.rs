//! Built-in catalog shown when the backend has no products

use champa_core::Product;

struct SeedEntry {
    id: i64,
    title: &'static str,
    price: &'static str,
    kind: &'static str,
    badge: &'static str,
    desc: &'static str,
}

const SEED: &[SeedEntry] = &[
    SeedEntry {
        id: 1,
        title: "Jersey Pro Blue",
        price: "LAK 199.000",
        kind: "football",
        badge: "ຂາຍດີ",
        desc: "ເສື້ອບານເຕະພິມລາຍໂທນນ້ຳເງິນ-ຂາວ ໃສ່ສະບາຍ ເໝາະກັບທີມແຂ່ງ",
    },
    SeedEntry {
        id: 2,
        title: "Runner Light White",
        price: "LAK 179.000",
        kind: "running",
        badge: "ມາໃໝ່",
        desc: "ເສື້ອວິ່ງຜ້າເບົາ ລະບາຍອາກາດດີ ເໝາະກັບງານວິ່ງແລະຊ້ອມ",
    },
    SeedEntry {
        id: 3,
        title: "Basket Pro Storm",
        price: "LAK 229.000",
        kind: "basketball",
        badge: "ຂາຍດີ",
        desc: "ເສື້ອບາສດີໄຊນ໌ດຸດັນ ໂທນສະປອດ ງານພິມຄົມຊັດ",
    },
    SeedEntry {
        id: 4,
        title: "eSport Neon Blue",
        price: "LAK 259.000",
        kind: "esport",
        badge: "HOT",
        desc: "ເສື້ອ eSport ດີໄຊນ໌ລ້ຳ ເທ່ແບບທີມແຂ່ງ ພ້ອມໃສ່ໂລໂກ້ສະປອນເຊີ",
    },
    SeedEntry {
        id: 5,
        title: "Football Classic White",
        price: "LAK 189.000",
        kind: "football",
        badge: "Classic",
        desc: "ເສື້ອບານເຕະໂທນຂາວສະອາດ ໃສ່ງ່າຍ ເບິ່ງມືອາຊີບ",
    },
    SeedEntry {
        id: 6,
        title: "Runner Pro Blue Wave",
        price: "LAK 199.000",
        kind: "running",
        badge: "New",
        desc: "ເສື້ອວິ່ງລາຍຄື່ນນ້ຳເງິນ ດ້ອດເດັ່ນ ຖ່າຍຮູບສວຍ",
    },
];

/// The six built-in products, ids 1 to 6
pub fn seed_products() -> Vec<Product> {
    SEED.iter()
        .map(|entry| Product {
            id: entry.id,
            title: entry.title.to_string(),
            price: entry.price.to_string(),
            kind: Some(entry.kind.to_string()),
            category: None,
            badge: Some(entry.badge.to_string()),
            desc: entry.desc.to_string(),
            image: Some(format!("images/products/{}.jpg", entry.id)),
            price_type: None,
        })
        .collect()
}
