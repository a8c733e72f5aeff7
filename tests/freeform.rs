//! Freeform packing: worked scenarios and a parametric invariant sweep.
//!
//! The sweep lays out every combination of a set of containers and image
//! mixes, checks geometric invariants on each result, and reports all
//! violations at once.

use zengallery::*;

const EPS: f64 = 1e-6;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < EPS
}

// ============================================================
// Worked scenarios
// ============================================================

mod scenarios {
    use super::*;

    #[test]
    fn one_landscape_image_in_square() {
        // 1600x900 in 400x400, no padding: full width, centered vertically.
        let layout = Freeform::new(400.0, 400.0)
            .padding(0.0)
            .compute(&[ImageDescriptor::new(1600, 900)]);
        let p = layout.placements[0];
        assert!(close(p.width, 400.0));
        assert!(close(p.height, 225.0));
        assert!(close(p.x, 0.0));
        assert!(close(p.y, 87.5));
    }

    #[test]
    fn one_landscape_image_with_default_padding() {
        let p = compute_layout(&[ImageDescriptor::new(1600, 900)], 400.0, 400.0, DEFAULT_GAP)[0];
        assert!(close(p.width, 392.0));
        assert!(close(p.height, 220.5));
        assert!(close(p.x, 4.0));
        assert!(close(p.y, 4.0 + (392.0 - 220.5) / 2.0));
    }

    #[test]
    fn two_squares_in_wide_container() {
        let images = [ImageDescriptor::new(1000, 1000), ImageDescriptor::new(1000, 1000)];
        let out = compute_layout(&images, 800.0, 300.0, 8.0);
        assert_eq!(out.len(), 2);
        for p in &out {
            assert!(close(p.width, 392.0));
            assert!(close(p.height, 292.0));
            assert!(close(p.y, 4.0));
        }
        assert!(close(out[0].x, 4.0));
        assert!(close(out[1].x, 404.0));
    }

    #[test]
    fn five_landscapes_make_three_by_two_with_centered_tail() {
        let images = vec![ImageDescriptor::new(1500, 1000); 5];
        let out = compute_layout(&images, 900.0, 600.0, 8.0);
        // cols = ceil(sqrt(5 * 892/592)) = 3, rows = 2, cells 292 x 292.
        let first_row_y = out[0].y;
        assert!(out[..3].iter().all(|p| p.y == first_row_y));
        assert!(out[3].y > first_row_y);
        assert_eq!(out[3].y, out[4].y);

        let tail_width = out[3].width + 8.0 + out[4].width;
        let left_margin = out[3].x - 4.0;
        let right_margin = 896.0 - out[4].right();
        assert!(close(left_margin, right_margin), "{left_margin} vs {right_margin}");
        assert!(close(tail_width, 592.0));
    }

    #[test]
    fn zero_container_is_clamped() {
        let images = [ImageDescriptor::new(800, 600)];
        let clamped = compute_layout(&images, 0.0, 0.0, 8.0);
        let explicit = compute_layout(&images, 100.0, 100.0, 8.0);
        assert_eq!(clamped, explicit);

        let one_axis = compute_layout(&images, 640.0, 0.0, 8.0);
        assert_eq!(one_axis, compute_layout(&images, 640.0, 100.0, 8.0));
    }

    #[test]
    fn failed_images_are_still_placed() {
        let images = [
            ImageDescriptor::from_load(LoadOutcome::Loaded {
                width: 1200,
                height: 800,
            }),
            ImageDescriptor::from_load(LoadOutcome::Failed),
            ImageDescriptor::new(800, 1200),
        ];
        let layout = Freeform::new(900.0, 600.0).compute(&images);
        assert_eq!(layout.placements.len(), 3);
        assert!(close(layout.placements[1].aspect_ratio(), FALLBACK_ASPECT_RATIO));
        assert_eq!(
            layout.corrections,
            vec![Correction::AspectRatioFallback { index: 1 }]
        );
    }
}

// ============================================================
// Parametric invariants
// ============================================================

const CONTAINERS: [(f64, f64); 13] = [
    (100.0, 100.0),
    (400.0, 400.0),
    (800.0, 300.0),
    (300.0, 800.0),
    (900.0, 600.0),
    (1920.0, 1080.0),
    (250.0, 1000.0),
    (2000.0, 120.0),
    (333.3, 217.7),
    (0.0, 0.0),
    (-5.0, 300.0),
    (1000.0, 99.5),
    (100.0, 2000.0),
];

const NATURAL_SIZES: [(u32, u32); 8] = [
    (1600, 900),
    (900, 1600),
    (1000, 1000),
    (4000, 1000),
    (1000, 4000),
    (0, 0),
    (3, 2),
    (1271, 833),
];

fn image_mixes() -> Vec<Vec<ImageDescriptor>> {
    let mut mixes = Vec::new();
    for n in 1..=12 {
        for offset in 0..NATURAL_SIZES.len() {
            let images = (0..n)
                .map(|i| {
                    let (w, h) = NATURAL_SIZES[(i + offset) % NATURAL_SIZES.len()];
                    ImageDescriptor::new(w, h)
                })
                .collect();
            mixes.push(images);
        }
    }
    mixes
}

#[test]
fn parametric_invariants() {
    let mut failures = Vec::new();
    let mut checked = 0u64;

    for &(cw, ch) in &CONTAINERS {
        let used = ContainerBox::new(cw, ch).clamped();
        for requested_gap in [0.0, 4.0, DEFAULT_GAP, 60.0, 250.0] {
            let padding = (requested_gap / 2.0).min((used.width.min(used.height) - 1.0) / 2.0);
            let avail_w = used.width - 2.0 * padding;
            for images in image_mixes() {
                let n = images.len();
                let tag = format!("{n} images in {cw}x{ch} gap {requested_gap}");
                let layout = Freeform::new(cw, ch).gap(requested_gap).compute(&images);
                let out = layout.placements;
                let gap = layout
                    .corrections
                    .iter()
                    .find_map(|c| match c {
                        Correction::GapReduced { used, .. } => Some(*used),
                        _ => None,
                    })
                    .unwrap_or(requested_gap);
                checked += 1;

                if out.len() != n {
                    failures.push(format!("{tag}: {} placements", out.len()));
                    continue;
                }

                let again = compute_layout(&images, cw, ch, requested_gap);
                let bits = |v: &[Placement]| -> Vec<[u64; 4]> {
                    v.iter()
                        .map(|p| {
                            [p.x.to_bits(), p.y.to_bits(), p.width.to_bits(), p.height.to_bits()]
                        })
                        .collect()
                };
                if bits(&out) != bits(&again) {
                    failures.push(format!("{tag}: not deterministic"));
                }

                for (i, p) in out.iter().enumerate() {
                    if !(p.width > 0.0 && p.height > 0.0) {
                        failures.push(format!("{tag}: #{i} empty {p:?}"));
                    }
                    if p.x < padding - EPS || p.y < padding - EPS {
                        failures.push(format!("{tag}: #{i} origin before padding {p:?}"));
                    }
                    if p.right() > used.width - padding + EPS
                        || p.bottom() > used.height - padding + EPS
                    {
                        failures.push(format!("{tag}: #{i} past container {p:?}"));
                    }
                    // Pairs may cap one axis; everything else keeps its ratio.
                    if n != 2 {
                        let want = images[i].aspect_ratio();
                        if (p.aspect_ratio() - want).abs() > 1e-6 * want.max(1.0) {
                            failures.push(format!(
                                "{tag}: #{i} ratio {} != {want}",
                                p.aspect_ratio()
                            ));
                        }
                    }
                }

                for i in 0..n {
                    for j in i + 1..n {
                        let (a, b) = (out[i], out[j]);
                        let shrunk = |p: Placement| {
                            Placement::new(p.x + EPS, p.y + EPS, p.width - 2.0 * EPS, p.height - 2.0 * EPS)
                        };
                        if shrunk(a).overlaps(&shrunk(b)) {
                            failures.push(format!("{tag}: #{i} overlaps #{j}"));
                        }
                    }
                }

                if n == 1 {
                    let p = out[0];
                    let avail_h = used.height - 2.0 * padding;
                    if !close(p.x, padding + (avail_w - p.width) / 2.0)
                        || !close(p.y, padding + (avail_h - p.height) / 2.0)
                    {
                        failures.push(format!("{tag}: single image not centered {p:?}"));
                    }
                }

                if n >= 3 {
                    // Group by row (placements in one row share their cell band).
                    let mut rows: Vec<Vec<Placement>> = Vec::new();
                    for p in &out {
                        let continues_row = rows
                            .last()
                            .and_then(|row| row.last())
                            .is_some_and(|q| p.x > q.x);
                        if continues_row
                            && let Some(row) = rows.last_mut()
                        {
                            row.push(*p);
                        } else {
                            rows.push(vec![*p]);
                        }
                    }
                    for (r, row) in rows.iter().enumerate() {
                        let total = row.iter().map(|p| p.width).sum::<f64>()
                            + gap * (row.len() - 1) as f64;
                        if total > avail_w + EPS {
                            failures.push(format!("{tag}: row {r} is {total} wide > {avail_w}"));
                        }
                    }
                }
            }
        }
    }

    assert!(checked > 1000, "only {checked} layouts checked");
    assert!(
        failures.is_empty(),
        "{} invariant failures:\n{}",
        failures.len(),
        failures.join("\n")
    );
}

#[test]
fn empty_input_for_every_container() {
    for &(cw, ch) in &CONTAINERS {
        assert!(compute_layout(&[], cw, ch, DEFAULT_GAP).is_empty());
    }
}

#[test]
fn hundreds_of_thumbnails_in_a_sidebar() {
    let images = vec![ImageDescriptor::new(1600, 900); 200];
    let out = compute_layout(&images, 100.0, 2000.0, DEFAULT_GAP);
    assert_eq!(out.len(), 200);
    let empty = out.iter().filter(|p| !(p.width > 0.0 && p.height > 0.0)).count();
    assert_eq!(empty, 0, "first: {:?}", out[0]);
    assert!(out.iter().all(|p| p.x >= 4.0 - EPS && p.right() <= 96.0 + EPS));
}
