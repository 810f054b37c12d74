use geometry::{Point, Triangle};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let cases: [(&str, [(f32, f32); 3], (f32, f32)); 14] = [
        ("interior point", [(2.0, 1.0), (6.0, 1.0), (4.0, 5.0)], (4.0, 2.5)),
        ("point on a vertex", [(1.5, 0.8), (5.2, 1.1), (3.7, 4.6)], (1.5, 0.8)),
        ("point on an edge", [(2.0, 1.0), (2.0, 5.0), (6.3, 1.0)], (2.0, 3.0)),
        ("collinear vertices", [(2.0, 0.0), (2.0, 5.0), (2.0, 9.0)], (2.0, 9.0)),
        ("negative coordinates", [(-3.0, -2.0), (-1.0, -4.0), (-5.0, -6.0)], (-3.0, -4.0)),
        ("mixed signs", [(-2.0, 1.0), (3.0, -1.0), (1.0, 4.0)], (0.5, 1.2)),
        ("just above an edge", [(0.0, 0.0), (4.0, 0.0), (2.0, 3.0)], (2.0, 0.01)),
        ("just below an edge", [(0.0, 0.0), (4.0, 0.0), (2.0, 3.0)], (2.0, -0.001)),
        ("very small triangle", [(0.0, 0.0), (0.1, 0.0), (0.05, 0.1)], (0.05, 0.03)),
        ("very large triangle", [(-1000.0, -1000.0), (1000.0, -1000.0), (0.0, 1000.0)], (0.0, 0.0)),
        ("far outside", [(1.0, 1.0), (3.0, 1.0), (2.0, 3.0)], (-100.0, -100.0)),
        ("clockwise winding", [(0.0, 0.0), (0.0, 4.0), (4.0, 0.0)], (1.0, 1.0)),
        ("nearly degenerate", [(0.0, 0.0), (10.0, 0.0), (5.0, 0.01)], (5.0, 0.005)),
        ("overflowing triangle", [(-4000.0, -4000.0), (4000.0, -4000.0), (0.0, 4000.0)], (0.0, 0.0)),
    ];

    for (name, vertices, query) in cases {
        let triangle = Triangle::from(vertices.map(Point::from));
        let p = Point::from(query);
        let [a, b, c] = triangle.vertices();
        println!("{name}: {a} {b} {c}, query {p}");
        println!("\tclassification: {:?}", triangle.classify(p));
        match triangle.try_contains(p) {
            Ok(inside) => println!("\tstrict: {inside}"),
            Err(err) => println!("\tstrict: {err}"),
        }
    }
}
