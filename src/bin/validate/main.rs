#[macro_use]
extern crate anyhow;
#[macro_use]
extern crate clap;
extern crate cgmath;
extern crate flexi_logger;
#[macro_use]
extern crate log;
extern crate rand;
extern crate sampling_kernels as sk;

mod argparse;

use std::f32::consts::PI;

use anyhow::Error;
use cgmath::prelude::*;
use rand::{SeedableRng, XorShiftRng};

use argparse::Settings;
use sk::stats::{mean, ZoneHistogram};
use sk::{RandomSource, Vec2, Vec3};

/// Outcome of a single check, logged as it completes.
struct Check {
    name: String,
    passed: bool,
}

fn main() {
    let settings = argparse::parse_args();

    let level = if settings.verbose { "debug" } else { "info" };
    let _logger = flexi_logger::Logger::try_with_env_or_str(level)
        .and_then(|logger| logger.format(flexi_logger::opt_format).start())
        .unwrap_or_else(|e| panic!("Failed to initialize logger: {}", e));

    if let Err(ref e) = run(&settings) {
        error!("{}", e);
        println!("Application error: {}", e);
        ::std::process::exit(1);
    }
}

fn run(settings: &Settings) -> Result<(), Error> {
    info!("Validating sampling kernels with {:?}", settings);

    let mut rng = XorShiftRng::from_seed([settings.seed, 0x9783_0e05, 0x113b_a7bb, 0xa8a7_d469]);

    let mut checks = Vec::new();
    checks.extend(hemisphere_checks(settings, &mut rng));
    checks.extend(sphere_checks(settings, &mut rng));
    checks.extend(disk_checks(settings, &mut rng));

    let failed: Vec<_> = checks.iter().filter(|c| !c.passed).map(|c| c.name.as_str()).collect();

    if failed.is_empty() {
        info!("All {} checks passed", checks.len());
        Ok(())
    } else {
        bail!("{} of {} checks failed: {}", failed.len(), checks.len(), failed.join(", "))
    }
}

fn check<S: Into<String>>(name: S, passed: bool) -> Check {
    let name = name.into();
    if passed {
        info!("{}: ok", name);
    } else {
        warn!("{}: FAILED", name);
    }
    Check { name, passed }
}

fn estimate(name: &str, expected: f32, result: f32, tolerance: f32) -> Check {
    info!("{}: Expected {}; Result {}", name, expected, result);
    check(name, ((result - expected) / expected).abs() < tolerance)
}

fn histogram(name: &str, histogram: &ZoneHistogram, tolerance: f32) -> Check {
    let deviation = histogram.max_relative_deviation();
    debug!("{}: bins {:?}, outliers {}", name, histogram.bins(), histogram.outliers());
    info!("{}: max relative deviation {}", name, deviation);
    check(name, deviation < tolerance)
}

fn is_unit(v: Vec3) -> bool {
    (v.magnitude() - 1.0).abs() < 1e-5
}

fn hemisphere_checks<R: RandomSource>(settings: &Settings, rng: &mut R) -> Vec<Check> {
    let normals = [
        Vec3::unit_x(),
        -Vec3::unit_y(),
        Vec3::unit_z(),
        Vec3::new(1.0, 1.0, 1.0).normalize(),
        Vec3::new(0.3, -0.9, 0.1).normalize(),
    ];

    let mut unit = true;
    let mut above = true;
    let mut cosines = ZoneHistogram::hemisphere(settings.bins);
    let mut weighted = Vec::with_capacity(settings.samples);

    for (idx, &normal) in normals.iter().cycle().take(settings.samples).enumerate() {
        let d = sk::sample_hemisphere_cosine(normal, rng);
        let cos_theta = d.dot(normal);

        unit &= is_unit(d);
        above &= cos_theta >= -1e-6;
        // cos^2 of a cosine weighted direction is uniform on [0,1]
        cosines.push(cos_theta * cos_theta);
        // integrand cos^2 over pdf cos/pi
        weighted.push(PI * cos_theta);

        if idx == 0 {
            debug!("First hemisphere sample {:?} about {:?}", d, normal);
        }
    }

    vec![
        check("hemisphere: unit length", unit),
        check("hemisphere: above plane", above),
        histogram("hemisphere: cosine weighting", &cosines, settings.tolerance),
        estimate(
            "hemisphere: integral of cos^2",
            2.0 * PI / 3.0,
            mean(weighted),
            settings.tolerance,
        ),
    ]
}

fn sphere_checks<R: RandomSource>(settings: &Settings, rng: &mut R) -> Vec<Check> {
    let kernels: [(&'static str, fn(Vec2) -> Vec3); 2] = [
        ("sphere (height)", sk::sample_sphere_uniform),
        ("sphere (spherical)", sk::sample_sphere_uniform_spherical),
    ];

    let mut checks = Vec::new();
    for &(name, kernel) in kernels.iter() {
        let mut unit = true;
        let mut zones = ZoneHistogram::sphere(settings.bins);
        let mut moments = Vec::with_capacity(settings.samples);

        for _ in 0..settings.samples {
            let p = kernel(rng.next_sample());
            unit &= is_unit(p);
            zones.push(p.z);
            // integrand z^2 over pdf 1/(4pi)
            moments.push(4.0 * PI * p.z * p.z);
        }

        checks.push(check(format!("{}: unit length", name), unit));
        checks.push(histogram(&format!("{}: equal area zones", name), &zones, settings.tolerance));
        checks.push(estimate(
            &format!("{}: integral of z^2", name),
            4.0 * PI / 3.0,
            mean(moments),
            settings.tolerance,
        ));
    }

    checks
}

fn disk_checks<R: RandomSource>(settings: &Settings, rng: &mut R) -> Vec<Check> {
    let mut inside = true;
    let mut planar = true;
    let mut rings = ZoneHistogram::new(0.0, 1.0, settings.bins);

    for _ in 0..settings.samples {
        let p = sk::sample_disk_concentric(rng.next_sample());
        let r2 = p.x * p.x + p.y * p.y;
        inside &= r2 <= 1.0 + 1e-6;
        planar &= p.z == 0.0;
        rings.push(r2.min(1.0));
    }

    let center = sk::sample_disk_concentric(Vec2::new(0.5, 0.5));

    vec![
        check("disk: inside unit disk", inside),
        check("disk: in xy plane", planar),
        check("disk: center maps to origin", center == Vec3::zero()),
        histogram("disk: equal area rings", &rings, settings.tolerance),
    ]
}
