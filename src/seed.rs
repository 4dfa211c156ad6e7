//! Built-in dataset used to seed an empty store on first run.
//!
//! Ids, display orders, prices, and bilingual text are fixed; tests and
//! existing data directories depend on these exact values.

use crate::model::{BilingualString, Category, MenuItem};

fn category(id: &str, en: &str, fa: &str, display_order: u32, is_special: bool) -> Category {
    Category { id: id.to_string(), name: BilingualString::new(en, fa), display_order, is_special }
}

#[allow(clippy::too_many_arguments)]
fn item(
    id: &str,
    name: (&str, &str),
    description: (&str, &str),
    price: f64,
    image_url: &str,
    category_id: &str,
    display_order: u32,
) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: BilingualString::new(name.0, name.1),
        description: BilingualString::new(description.0, description.1),
        price,
        image_url: image_url.to_string(),
        category_id: category_id.to_string(),
        display_order,
    }
}

/// The four seed categories.
#[must_use]
pub fn categories() -> Vec<Category> {
    vec![
        category("1", "Hot Coffees", "قهوه‌های گرم", 0, false),
        category("2", "Cakes & Pastries", "کیک و شیرینی", 1, false),
        category("3", "Cold Drinks", "نوشیدنی‌های سرد", 2, false),
        category("4", "Chef's Specials", "ویژه سرآشپز", 3, true),
    ]
}

/// The twelve seed menu items, display orders `0..=11`.
#[must_use]
pub fn menu_items() -> Vec<MenuItem> {
    vec![
        // Hot Coffees
        item(
            "101",
            ("Espresso", "اسپرسو"),
            (
                "A concentrated coffee beverage brewed by forcing a small amount of nearly boiling water under pressure through finely-ground coffee beans.",
                "یک نوشیدنی قهوه غلیظ که با عبور دادن آب نزدیک به جوش با فشار از میان دانه‌های قهوه آسیاب شده تهیه می‌شود.",
            ),
            2.50,
            "https://images.unsplash.com/photo-1579992302924-635a7c5c3818?q=80&w=800",
            "1",
            0,
        ),
        item(
            "102",
            ("Latte", "لاته"),
            (
                "A coffee drink made with espresso and steamed milk, with a thin layer of foam.",
                "یک نوشیدنی قهوه که با اسپرسو و شیر بخار داده شده و لایه‌ای نازک از کف تهیه می‌شود.",
            ),
            3.50,
            "https://images.unsplash.com/photo-1561882468-91101f2e5f87?q=80&w=800",
            "1",
            1,
        ),
        item(
            "103",
            ("Cappuccino", "کاپوچینو"),
            (
                "An espresso-based coffee drink that originated in Italy, and is traditionally prepared with steamed milk foam.",
                "یک نوشیدنی قهوه ایتالیایی بر پایه اسپرسو که به طور سنتی با کف شیر بخار داده شده تهیه می‌شود.",
            ),
            3.50,
            "https://images.unsplash.com/photo-1557006021-b85faa2bc5e2?q=80&w=800",
            "1",
            2,
        ),
        item(
            "104",
            ("Mocha", "موکا"),
            ("A chocolate-flavoured variant of a caffè latte.", "نوعی لاته با طعم شکلات."),
            4.00,
            "https://images.unsplash.com/photo-1542287447-098871383578?q=80&w=800",
            "1",
            3,
        ),
        // Cakes & Pastries
        item(
            "201",
            ("Chocolate Cake", "کیک شکلاتی"),
            (
                "A rich and moist chocolate cake, perfect for any occasion.",
                "یک کیک شکلاتی غنی و مرطوب، عالی برای هر مناسبتی.",
            ),
            4.00,
            "https://images.unsplash.com/photo-1578985545062-69928b1d9587?q=80&w=800",
            "2",
            4,
        ),
        item(
            "202",
            ("Croissant", "کروسان"),
            (
                "A buttery, flaky, viennoiserie pastry named for its historical crescent shape.",
                "یک شیرینی کره‌ای و لایه‌ای به شکل هلال ماه.",
            ),
            2.75,
            "https://images.unsplash.com/photo-1530610476181-d83430b64dcd?q=80&w=800",
            "2",
            5,
        ),
        item(
            "203",
            ("Cheesecake", "چیزکیک"),
            (
                "A sweet dessert consisting of one or more layers. The main, and thickest, layer consists of a mixture of soft, fresh cheese.",
                "یک دسر شیرین شامل یک یا چند لایه که لایه اصلی و ضخیم آن از مخلوطی از پنیر نرم و تازه تشکیل شده است.",
            ),
            4.50,
            "https://images.unsplash.com/photo-1534401391509-d75d750c8b2a?q=80&w=800",
            "2",
            6,
        ),
        // Cold Drinks
        item(
            "301",
            ("Iced Americano", "آیس آمریکانو"),
            (
                "Espresso shots topped with cold water produce a light layer of crema, then served over ice.",
                "شات‌های اسپرسو که با آب سرد ترکیب شده و روی یخ سرو می‌شود.",
            ),
            3.00,
            "https://images.unsplash.com/photo-1517701550927-4e4b7da16931?q=80&w=800",
            "3",
            7,
        ),
        item(
            "302",
            ("Cold Brew", "کلد برو"),
            (
                "A coffee concentrate made by steeping coarsely ground coffee beans in cold water for several hours.",
                "یک کنسانتره قهوه که با خیساندن دانه‌های قهوه درشت آسیاب شده در آب سرد برای چندین ساعت تهیه می‌شود.",
            ),
            4.25,
            "https://images.unsplash.com/photo-1514432324607-a07d763f08c5?q=80&w=800",
            "3",
            8,
        ),
        item(
            "303",
            ("Fresh Orange Juice", "آب پرتقال طبیعی"),
            (
                "Squeezed from fresh oranges, a classic refreshing drink.",
                "گرفته شده از پرتقال‌های تازه، یک نوشیدنی کلاسیک و طراوت‌بخش.",
            ),
            3.75,
            "https://images.unsplash.com/photo-1600271886742-f049cd451bba?q=80&w=800",
            "3",
            9,
        ),
        // Chef's Specials
        item(
            "401",
            ("Affogato", "آفوگاتو"),
            (
                "A scoop of vanilla gelato or ice cream drowned with a shot of hot espresso.",
                "یک اسکوپ بستنی وانیلی که در یک شات اسپرسوی داغ غرق شده است.",
            ),
            5.50,
            "https://images.unsplash.com/photo-1629587421389-a2e6cb1a8027?q=80&w=800",
            "4",
            10,
        ),
        item(
            "402",
            ("Tiramisu", "تیرامیسو"),
            (
                "A coffee-flavoured Italian dessert. It is made of ladyfingers dipped in coffee, layered with a whipped mixture of eggs, sugar and mascarpone cheese, flavoured with cocoa.",
                "یک دسر ایتالیایی با طعم قهوه، ساخته شده از بیسکویت‌های لیدی فینگر آغشته به قهوه و لایه‌هایی از مخلوط تخم‌مرغ، شکر و پنیر ماسکارپونه، با طعم کاکائو.",
            ),
            6.00,
            "https://images.unsplash.com/photo-1571877227200-a0d98ea607e9?q=80&w=800",
            "4",
            11,
        ),
    ]
}
