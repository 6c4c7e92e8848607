// Constants for the seeded shop

use crate::inventory::ProductId;

/// Default path of the name-sort timing log
pub const DEFAULT_TIMING_LOG: &str = "log.txt";

/// Products loaded at startup: (id, name, price, stock)
pub const SEED_PRODUCTS: &[(ProductId, &str, f64, u32)] = &[
    (1, "Laptop", 999.99, 10),
    (2, "Mouse", 25.50, 100),
    (3, "Keyboard", 45.75, 75),
    (4, "Monitor", 199.99, 30),
    (5, "USB Cable", 5.99, 200),
    (6, "Charger", 15.49, 50),
    (7, "Headphones", 89.99, 40),
    (8, "Webcam", 55.25, 35),
    (9, "Microphone", 60.00, 25),
    (10, "Graphics Card", 399.95, 20),
    (11, "Desk Lamp", 29.95, 45),
    (12, "Phone Stand", 14.90, 100),
    (13, "Gaming Chair", 249.99, 15),
    (14, "Tablet", 320.00, 22),
    (15, "Smartphone", 850.00, 18),
];

/// Recommendation edges loaded at startup: (from, to)
pub const SEED_RECOMMENDATIONS: &[(ProductId, ProductId)] = &[
    (1, 2),
    (1, 3),
    (1, 10),
    (2, 5),
    (3, 5),
    (4, 10),
    (10, 14),
];
