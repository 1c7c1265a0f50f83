use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    use signed_distance_field::prelude::*;

    let mut arguments = std::env::args().skip(1);
    let source = arguments.next().unwrap_or_else(|| String::from("images/sketch.jpg"));
    let target = arguments.next().unwrap_or_else(|| String::from("images/sketch_distance.png"));

    let mut gray_image = image::open(&source)?.to_luma();
    image::imageops::invert(&mut gray_image);

    let binary_image = binary_piston_image::of_gray_u8_image_with_threshold(&gray_image, 80)?;

    let distance_field = compute_signed_distance_field(&binary_image);
    let distance_image = distance_piston_image::to_rgb_u8_image(&distance_field);

    distance_image.save(&target)?;
    println!("wrote distance field of {} to {}", source, target);
    Ok(())
}
