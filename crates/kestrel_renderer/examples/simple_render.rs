//! Simple Whitted ray tracer example.
//!
//! Builds a mirror sphere, a glass sphere and a floor plane in code,
//! lights them with a spot and an area light, and saves to PPM format.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::sync::Arc;

use kestrel_renderer::{
    area_light, render_parallel, Camera, Color, ImageBuffer, Material, Plane, PointLight,
    RenderConfig, Scene, Sphere, SpotLight, Vec3, DEFAULT_BUCKET_SIZE,
};

fn main() -> std::io::Result<()> {
    println!("Kestrel Ray Tracer - Simple Example");
    println!("===================================");

    let start = std::time::Instant::now();
    let scene = build_scene();
    println!(
        "Scene built in {:?} ({} primitives, {} lights)",
        start.elapsed(),
        scene.len(),
        scene.light_count()
    );

    let config = RenderConfig {
        width: 640,
        height: 360,
        background: Color::new(0.05, 0.07, 0.1),
        ambient_light: Color::splat(0.1),
        max_depth: 6,
        ..Default::default()
    };

    let camera = Camera::new(
        Vec3::new(0.0, 1.5, 6.0),
        Vec3::new(0.0, 0.5, 0.0),
        Vec3::Y,
        45.0,
        config.width as f32 / config.height as f32,
    );

    println!("Rendering {}x{}...", config.width, config.height);

    let start = std::time::Instant::now();
    let image = render_parallel(&scene, &camera, &config, DEFAULT_BUCKET_SIZE);
    println!("Rendered in {:?}", start.elapsed());

    let filename = "output.ppm";
    save_ppm(&image, config.exposure, filename)?;
    println!("Saved to {}", filename);

    Ok(())
}

fn build_scene() -> Scene {
    let mut scene = Scene::new();

    let floor = Arc::new(
        Material::diffuse(Color::new(0.6, 0.6, 0.55)).with_ambient(Color::splat(0.3)),
    );
    scene.add(Box::new(Plane::new(Vec3::ZERO, Vec3::Y, floor)));

    let red = Arc::new(
        Material::diffuse(Color::new(0.8, 0.15, 0.1))
            .with_ambient(Color::new(0.3, 0.05, 0.05))
            .with_specular(Color::splat(0.5), 40.0),
    );
    scene.add(Box::new(Sphere::new(Vec3::new(-1.8, 0.7, -0.5), 0.7, red)));

    let mirror = Arc::new(Material::mirror(Color::splat(0.9)));
    scene.add(Box::new(Sphere::new(Vec3::new(0.0, 1.0, -1.5), 1.0, mirror)));

    let glass = Arc::new(Material::glass(Some(Color::splat(0.1)), Color::splat(0.9), 1.5));
    scene.add(Box::new(Sphere::new(Vec3::new(1.6, 0.6, 0.8), 0.6, glass)));

    scene.add_light(Box::new(PointLight::new(
        Vec3::new(-4.0, 6.0, 4.0),
        Color::splat(0.6),
    )));
    scene.add_light(Box::new(SpotLight::new(
        Vec3::new(3.0, 5.0, 3.0),
        Vec3::new(0.0, 0.5, 0.0),
        Color::new(0.9, 0.85, 0.7),
        8.0,
        30.0,
    )));
    scene.add_lights(area_light(
        Vec3::new(0.0, 5.0, 0.0),
        1.0,
        Color::splat(0.4),
        4,
    ));

    scene
}

fn save_ppm(image: &ImageBuffer, exposure: f32, filename: &str) -> std::io::Result<()> {
    let file = File::create(filename)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    for rgba in image.to_rgba(exposure).chunks_exact(4) {
        writeln!(writer, "{} {} {}", rgba[0], rgba[1], rgba[2])?;
    }

    Ok(())
}
