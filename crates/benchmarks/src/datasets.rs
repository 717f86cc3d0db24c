use custledger_core::Customer;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

const FIRST_NAMES: &[&str] = &[
    "Alice", "Bob", "Carla", "Dmitri", "Erin", "Farah", "Gus", "Hana", "Ivan", "Jo",
];
const LAST_NAMES: &[&str] = &[
    "Johnson", "Smith", "Gomez", "Petrov", "O'Neil", "Khan", "Lee", "Novak", "Ruiz", "Tan",
];

/// Deterministic valid customers with ids `1..=count` in shuffled store order.
pub fn generate_customers(count: usize, seed: u64) -> Vec<Customer> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut ids: Vec<i64> = (1..=count as i64).collect();
    ids.shuffle(&mut rng);
    ids.into_iter()
        .map(|id| {
            let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
            let last = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
            let name = format!("{first} {last}");
            let code = format!("{}{id}", random_letters(&mut rng, 3));
            let address = format!("{} {} St.", rng.gen_range(1..9999), last);
            Customer::new(id, &name, &code, Some(&address))
                .unwrap_or_else(|e| panic!("generated customer {id} is invalid: {e}"))
        })
        .collect()
}

fn random_letters(rng: &mut StdRng, len: usize) -> String {
    (0..len).map(|_| rng.gen_range(b'A'..=b'Z') as char).collect()
}
