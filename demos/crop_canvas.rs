// MIT/Apache2 License

use linecrop::{point, BatchPolicy, Box2D, CropOptions, Document, PathDocument, Result};

fn main() -> Result {
    env_logger::init();

    let mut doc = PathDocument::new().with_canvas(Box2D::new(point(0.0, 0.0), point(640.0, 400.0)));
    doc.push("M 10 10 L 630 390");
    doc.push("M -100 200 L 740 200");
    doc.push("M 320 -50 V 300");
    doc.push("M 700 500 L 900 900");
    doc.push("M 100 100 L 200 100 L 200 200 Z");
    doc.push("M 0 0 C 10 10 20 20 30 30");

    let options = CropOptions::new().with_policy(BatchPolicy::Skip);
    println!("Cropping against {:?}", options.resolve_bounds(&doc));

    let stats = options.crop_all(&mut doc)?;
    println!("{}", stats);

    for id in doc.list() {
        if let Some(data) = doc.read(id) {
            println!("{}: {}", id, data);
        }
    }

    Ok(())
}
