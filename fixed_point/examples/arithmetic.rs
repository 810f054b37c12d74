use fixed_point::Fixed;
use tracing_subscriber::EnvFilter;

fn main() {
    // Overflow notices arrive as warnings; RUST_LOG=off silences them
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let mut a = Fixed::ZERO;
    let b = Fixed::from_f32(5.05) * Fixed::from_int(2);

    println!("a = {a}");
    println!("++a = {}", a.increment());
    println!("a = {a}");
    println!("a++ = {}", a.post_increment());
    println!("a = {a}");
    println!("b = {b}");
    println!("max(a, b) = {}", Fixed::max_of(a, b));
    println!();

    let c = Fixed::from_f32(2.5);
    println!("c + b = {}", c + b);
    println!("c - b = {}", c - b);
    println!("c * b = {}", c * b);
    println!("c / b = {}", c / b);
    println!("min(c, b) = {}", Fixed::min_of(c, b));
    println!();

    let near_max = Fixed::from_raw(i32::MAX - 100);
    let step = Fixed::from_raw(200);
    println!("near_max (raw {}) = {near_max}", near_max.raw_bits());
    println!("near_max + step = {}", near_max + step);
    println!("c / 0 = {}", c / Fixed::ZERO);

    let outcome = Fixed::MIN.sub_with_status(Fixed::ONE);
    println!("MIN - 1 = {} ({:?})", outcome.value(), outcome.status());
    match Fixed::MAX.checked_mul(Fixed::from_int(2)) {
        Ok(v) => println!("MAX * 2 = {v}"),
        Err(err) => println!("MAX * 2 failed: {err}"),
    }
}
