use numquad::reference::{integrate, QuadOptions};
use numquad::{closed_form, derivative, riemann, simpson, squared_error, trapezoid, DEFAULT_STEP};

fn main() {
    // Reconstruct cos from its antiderivative sin, then integrate it
    // over [1.0, 1.5] with each rule.
    let f = |x: f64| derivative(f64::sin, x, DEFAULT_STEP);
    let (a, b) = (1.0, 1.5);
    let exact = closed_form(f64::sin, a, b);

    println!("integrating d/dx sin(x) over [{a}, {b}]");
    println!("closed form:      {exact:.17}");

    let estimates = [
        ("riemann (n=1000)", riemann(f, a, b, 1000)),
        ("trapezoid (n=1000)", trapezoid(f, a, b, 1000)),
        ("simpson (n=100)", simpson(f, a, b, 100)),
    ];
    for (label, estimate) in estimates {
        match estimate {
            Ok(value) => println!(
                "{label:<20} {value:.12}   squared error {:.3e}",
                squared_error(value, exact)
            ),
            Err(err) => println!("{label:<20} failed: {err}"),
        }
    }

    // Standard normal density over [0, 1], checked against the adaptive
    // Gauss-Kronrod oracle.
    let density = |x: f64| (-x * x / 2.0).exp() / (2.0 * std::f64::consts::PI).sqrt();
    println!();
    println!("integrating the standard normal density over [0, 1]");
    match integrate(density, 0.0, 1.0, &QuadOptions::default()) {
        Ok(oracle) => {
            println!(
                "adaptive oracle:     {:.12}   ({} evaluations)",
                oracle.value, oracle.evaluations
            );
            match simpson(density, 0.0, 1.0, 20) {
                Ok(value) => println!(
                    "simpson (n=20):      {value:.12}   squared error {:.3e}",
                    squared_error(value, oracle.value)
                ),
                Err(err) => println!("simpson (n=20) failed: {err}"),
            }
        }
        Err(err) => println!("adaptive oracle failed: {err}"),
    }
}
