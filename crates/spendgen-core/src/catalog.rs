//! Fixed catalog of spending categories plus the amount/frequency profiles
//! and note pool used by the randomized dataset synthesizer.

/// `(id, name, ARGB color)` rows. Ids and names are stable across runs so
/// generated datasets stay importable next to previously generated ones.
pub const DEFAULT_CATEGORIES: &[(u32, &str, u32)] = &[
    (1, "Mortgage/Rent", 4285621195),
    (2, "Property Taxes", 4280370935),
    (3, "Household Repairs", 4293100636),
    (4, "Home Improvement", 4286965164),
    (5, "House Insurance", 4287373591),
    (6, "HOA Fees", 4293398378),
    (7, "Household Maintenance", 4285744824),
    (8, "Car Payment", 4290655436),
    (9, "Car Warranty", 4284429947),
    (10, "Car Repairs", 4292310529),
    (11, "Gas/Fuel", 4288283190),
    (12, "Car Insurance", 4284770116),
    (13, "Public Transport", 4282158503),
    (14, "Car Supplies", 4288872890),
    (15, "Parking Fees", 4283339898),
    (16, "Tolls", 4286044350),
    (17, "Car Registration", 4286953505),
    (18, "Electricity", 4279959086),
    (19, "Water", 4291602331),
    (20, "Trash/Recycling", 4293261358),
    (21, "Gas Utility", 4289614956),
    (22, "Sewer", 4287035065),
    (23, "Phone Bill", 4294087151),
    (24, "Internet Bill", 4292220174),
    (25, "Alarm System", 4278606117),
    (26, "Health Insurance", 4290592052),
    (27, "Dental Insurance", 4288302892),
    (28, "Vision Insurance", 4285157062),
    (29, "Life Insurance", 4291898449),
    (30, "Long-Term Care Insurance", 4281962134),
    (31, "Disability Insurance", 4289887110),
    (32, "Malpractice Insurance", 4280892191),
    (33, "Liability Insurance", 4283727620),
    (34, "Prescriptions", 4294020540),
    (35, "Doctor Visits", 4279626861),
    (36, "Dentist Visits", 4285557277),
    (37, "Eye Doctor", 4287743685),
    (38, "Other Doctor Visits", 4294906509),
    (39, "Credit Cards", 4290007025),
    (40, "Student Loans", 4291386637),
    (41, "Car Loans", 4292986904),
    (42, "Personal Loans", 4279449782),
    (43, "Medical Bills", 4287558894),
    (44, "Extra House Loans", 4291719430),
    (45, "Emergency Fund", 4280055375),
    (46, "Retirement Savings", 4288678433),
    (47, "College Savings", 4287318239),
    (48, "Other Savings", 4283990436),
    (49, "Additional Investing", 4285923663),
    (50, "Groceries", 4284534818),
    (51, "Restaurants", 4288577676),
    (52, "Holiday Food", 4293646965),
    (53, "Convenience Meals", 4287746307),
    (54, "Delivery Fees", 4293198152),
    (55, "Paper Towels", 4283680703),
    (56, "Diapers", 4293516978),
    (57, "Baby Formula", 4293128503),
    (58, "Cleaning Supplies", 4285037287),
    (59, "Dishwasher Soap", 4288657568),
    (60, "Laundry Detergent", 4286619611),
    (61, "Kleenex", 4283331626),
    (62, "Paper Plates", 4281673002),
    (63, "Basic Tools", 4288730104),
    (64, "Childcare", 4279773815),
    (65, "Office Supplies", 4280328153),
    (66, "Work Subscriptions", 4286445551),
    (67, "Extra Travel", 4283435770),
    (68, "Continuing Education", 4285324372),
    (69, "Work Uniform", 4285688106),
    (70, "Gym Membership", 4292379526),
    (71, "Hair Care", 4285337650),
    (72, "Alcohol", 4288242380),
    (73, "Makeup", 4281246307),
    (74, "Clothing", 4287031659),
    (75, "Vitamins", 4282543359),
    (76, "Movies", 4284528265),
    (77, "Concerts", 4285818433),
    (78, "Books", 4286224694),
    (79, "Bars", 4290483972),
    (80, "Outings", 4288912298),
    (81, "Cable", 4290069189),
    (82, "Hobby Supplies", 4293167751),
    (83, "Streaming", 4291395711),
    (84, "Other Subscriptions", 4288750166),
    (85, "Vacations", 4290356652),
    (86, "Casinos", 4282015701),
    (87, "Amusement Parks", 4287956327),
    (88, "Gifts", 4287719005),
    (89, "Holidays", 4287281098),
    (90, "Donations", 4288132221),
    (91, "Babysitters", 4289282207),
    (92, "Extracurricular", 4286575822),
    (93, "Activity Supplies", 4284424531),
    (94, "School Supplies", 4293413118),
    (95, "Kids Healthcare", 4281114142),
    (96, "Kids Haircuts", 4294273423),
    (97, "Teacher Gifts", 4286584582),
    (98, "School Pictures", 4294349975),
    (99, "Birthday Gifts", 4293960975),
    (100, "Allowance", 4278741177),
    (101, "Kids Clothes", 4281034466),
    (102, "Lunch Money", 4284484634),
    (103, "Summer Camps", 4284083977),
    (104, "Pet Food", 4280480802),
    (105, "Pet Meds", 4287263824),
    (106, "Kenneling", 4282599220),
    (107, "Vet Bills", 4291799942),
    (108, "Grooming", 4294168985),
    (109, "Pet Sitter", 4284261006),
    (110, "Pet Training", 4290521007),
    (111, "Household Replacements", 4283405644),
    (112, "Parking Tickets", 4278330236),
    (113, "Postage", 4280149528),
    (114, "Special Occasions", 4278667258),
    (115, "Party Expenses", 4286338092),
    (116, "ATM Fees", 4294513637),
];

/// Amount range and relative sampling frequency for one category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmountProfile {
    pub min: f64,
    pub max: f64,
    pub weight: u32,
}

/// Applied to any category without an explicit profile row.
pub const FALLBACK_PROFILE: AmountProfile = AmountProfile {
    min: 5.0,
    max: 200.0,
    weight: 1,
};

/// `(category name, min, max, weight)`. Several rows name categories that are
/// not in the catalog; they are harmless leftovers from an earlier catalog
/// revision and keep amount behavior stable if those names return.
const AMOUNT_PROFILES: &[(&str, f64, f64, u32)] = &[
    ("Food", 5.0, 60.0, 20),
    ("Transport", 10.0, 150.0, 20),
    ("Shopping", 20.0, 400.0, 8),
    ("Entertainment", 5.0, 120.0, 6),
    ("Game", 50.0, 500.0, 2),
    ("Bills", 100.0, 5000.0, 3),
    ("Health", 10.0, 200.0, 2),
    ("Education", 50.0, 3000.0, 1),
    ("Groceries", 20.0, 300.0, 10),
    ("Travel", 50.0, 2000.0, 1),
    ("Fuel", 20.0, 200.0, 4),
    ("Subscriptions", 1.0, 50.0, 4),
    ("Pets", 5.0, 200.0, 1),
    ("Rent", 300.0, 5000.0, 1),
    ("Investment", 10.0, 2000.0, 1),
    ("Course", 100.0, 3000.0, 1),
    ("Mobile", 5.0, 100.0, 4),
    ("Mortgage/Rent", 800.0, 3000.0, 2),
    ("Car Payment", 200.0, 800.0, 2),
    ("Restaurants", 10.0, 100.0, 15),
    ("Clothing", 20.0, 300.0, 5),
    ("Gym Membership", 20.0, 100.0, 1),
    ("Vacations", 500.0, 5000.0, 1),
    ("Gifts", 10.0, 200.0, 3),
    ("Donations", 5.0, 500.0, 1),
    ("Pet Food", 10.0, 100.0, 2),
    ("Vet Bills", 50.0, 1000.0, 1),
];

pub fn amount_profile(category_name: &str) -> AmountProfile {
    AMOUNT_PROFILES
        .iter()
        .find(|(name, _, _, _)| *name == category_name)
        .map(|(_, min, max, weight)| AmountProfile {
            min: *min,
            max: *max,
            weight: *weight,
        })
        .unwrap_or(FALLBACK_PROFILE)
}

/// Free-text note pool sampled uniformly per transaction. `None` means no
/// note at all; the empty string is a present-but-blank note.
pub const SAMPLE_NOTES: &[Option<&str>] = &[
    None,
    Some(""),
    Some("Lunch"),
    Some("Taxi"),
    Some("Uber"),
    Some("Groceries"),
    Some("Steam sale"),
    Some("Zero Escape"),
    Some("Portal & Portal 2"),
    Some("Half-Life 2 & Ep 1,2"),
    Some("Witcher 3"),
    Some("Cactus"),
    Some("Subscription renewal"),
    Some("Medicine"),
    Some("Coffee"),
    Some("Dinner"),
    Some("Gas fill-up"),
    Some("Movie ticket"),
    Some("Gym session"),
    Some("Haircut"),
    Some("Vet visit"),
    Some("School supplies"),
];
