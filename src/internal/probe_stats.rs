#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::indexing_slicing)]

//! Measures how tombstones left by insert/remove churn stretch probe sequences.
//!
//! The map is filled to a fixed occupancy below its growth threshold. Each round
//! removes a batch of random live keys and inserts as many fresh ones, so the live
//! count never moves and the table never doubles. Tombstones are only reused by
//! insertions that happen to probe through them, so they pile up and every lookup
//! gets longer.

use openmap::OpenAddressingMap;
use plotters::prelude::*;
use rand::Rng;

const CAPACITY: usize = 1 << 14;
const LOAD_FACTOR: f64 = 0.5;
// Share of the growth threshold kept live during churn
const OCCUPANCY: f64 = 0.9;
const ROUNDS: usize = 40;
const CHURN_PER_ROUND: usize = 512;
const SAMPLES: usize = 2_000;

#[derive(Debug, Clone, Copy)]
struct RoundStats {
    avg_hit: f64,
    avg_miss: f64,
    worst_miss: usize,
    tombstones: usize,
}

fn sample(map: &OpenAddressingMap<u64, u64>, live: &[u64], rng: &mut impl Rng) -> RoundStats {
    let mut hit_total = 0;
    let mut miss_total = 0;
    let mut worst_miss = 0;

    for _ in 0..SAMPLES {
        let key = live[rng.random_range(0..live.len())];
        hit_total += map.probe_length(&key);

        let absent: u64 = rng.random();
        if !map.contains_key(&absent) {
            let probes = map.probe_length(&absent);
            miss_total += probes;
            worst_miss = worst_miss.max(probes);
        }
    }

    RoundStats {
        avg_hit: hit_total as f64 / SAMPLES as f64,
        avg_miss: miss_total as f64 / SAMPLES as f64,
        worst_miss,
        tombstones: map.tombstone_count(),
    }
}

fn run() -> Result<Vec<RoundStats>, Box<dyn std::error::Error>> {
    let mut rng = rand::rng();
    let mut map = OpenAddressingMap::with_capacity_and_load_factor(CAPACITY, LOAD_FACTOR)?;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let target = (map.threshold() as f64 * OCCUPANCY) as usize;
    let mut live = Vec::with_capacity(target);
    while live.len() < target {
        let key: u64 = rng.random();
        if map.insert(key, key).is_none() {
            live.push(key);
        }
    }

    println!("Capacity: {}, live entries: {}, threshold: {}", map.capacity(), map.len(), map.threshold());

    let mut rounds = vec![sample(&map, &live, &mut rng)];
    for round in 1..=ROUNDS {
        for _ in 0..CHURN_PER_ROUND {
            let victim = live.swap_remove(rng.random_range(0..live.len()));
            map.remove(&victim);

            let key: u64 = rng.random();
            if map.insert(key, key).is_none() {
                live.push(key);
            }
        }

        let stats = sample(&map, &live, &mut rng);
        println!(
            "  round {round}: tombstones = {}, avg hit = {:.2}, avg miss = {:.2}, worst miss = {}, capacity = {}",
            stats.tombstones,
            stats.avg_hit,
            stats.avg_miss,
            stats.worst_miss,
            map.capacity()
        );
        rounds.push(stats);
    }

    Ok(rounds)
}

fn plot(rounds: &[RoundStats]) -> Result<(), Box<dyn std::error::Error>> {
    let font_family = "sans-serif";
    let text_size = 16;
    let title_size = 30;
    let line_width = 2;

    let root = BitMapBackend::new("probe_length.png", (1200, 900)).into_drawing_area();
    root.fill(&WHITE)?;
    let areas = root.split_evenly((2, 1));

    let max_probes = rounds.iter().map(|r| r.avg_hit.max(r.avg_miss)).fold(1.0, f64::max) * 1.1;

    let mut probe_chart = ChartBuilder::on(&areas[0])
        .caption("Average Probe Length Under Churn", (font_family, title_size))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0..rounds.len(), 0.0..max_probes)?;

    probe_chart
        .configure_mesh()
        .x_desc("Churn Round")
        .y_desc("Slots Visited")
        .axis_desc_style((font_family, text_size))
        .draw()?;

    let series: [(&str, RGBColor, fn(&RoundStats) -> f64); 2] = [
        ("Successful lookup", RGBColor(50, 90, 220), |r: &RoundStats| r.avg_hit),
        ("Failed lookup", RGBColor(220, 50, 50), |r: &RoundStats| r.avg_miss),
    ];
    for (label, color, metric) in series {
        let style = ShapeStyle::from(&color).stroke_width(line_width);
        probe_chart
            .draw_series(LineSeries::new(rounds.iter().enumerate().map(|(i, r)| (i, metric(r))), style))?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
    }

    probe_chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    let max_tombstones = rounds.iter().map(|r| r.tombstones).max().unwrap_or(0).max(1);

    let mut tombstone_chart = ChartBuilder::on(&areas[1])
        .caption("Tombstones Left In The Table", (font_family, title_size))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0..rounds.len(), 0..max_tombstones + max_tombstones / 10)?;

    tombstone_chart
        .configure_mesh()
        .x_desc("Churn Round")
        .y_desc("Tombstones")
        .axis_desc_style((font_family, text_size))
        .draw()?;

    let style = ShapeStyle::from(&RGBColor(50, 180, 50)).stroke_width(line_width);
    tombstone_chart.draw_series(LineSeries::new(
        rounds.iter().enumerate().map(|(i, r)| (i, r.tombstones)),
        style,
    ))?;

    root.present()?;
    println!("Generated plot image: probe_length.png");
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let rounds = run()?;
    plot(&rounds)
}
