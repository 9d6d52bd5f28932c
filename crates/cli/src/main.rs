use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

use railmap::api::{
    build_route_map, generate_destinations, mutate, shuffled, triangulate, DestinationCfg,
    GeomCfg, MutateCfg, ReplayToken, RouteMap, SearchCfg, Shape, TriangulateCfg,
};

mod nodes;
mod provenance;

use nodes::NamedNode;
use provenance::Payload;

#[derive(Parser)]
#[command(name = "railmap")]
#[command(about = "Route-map generation and scoring")]
struct Cmd {
    /// Seed for every randomized pass; same seed, same map
    #[arg(long, default_value_t = 0)]
    seed: u64,

    #[command(subcommand)]
    action: Action,
}

/// Where the map's locations come from: a nodes file or a seeded cloud.
#[derive(Args)]
struct NodeSource {
    /// JSON array of `{"name"?, "x", "y"}` records
    #[arg(long, conflicts_with = "random")]
    nodes: Option<PathBuf>,
    /// Generate this many seeded unit-box nodes instead of reading a file
    #[arg(long)]
    random: Option<usize>,
    /// Shuffle insertion order before triangulating (seeded)
    #[arg(long)]
    shuffle: bool,
    /// Super-triangle margin scale
    #[arg(long, default_value_t = 1.0)]
    scale: f64,
}

#[derive(Subcommand)]
enum Action {
    /// Build a full map and write scored destination pairs
    Generate {
        #[command(flatten)]
        source: NodeSource,
        /// Mutation rounds over the built graph
        #[arg(long, default_value_t = 10)]
        steps: usize,
        /// Disable route duplication rounds
        #[arg(long)]
        no_duplicate: bool,
        /// Disable route removal rounds
        #[arg(long)]
        no_remove: bool,
        /// Disable edge-flip rounds
        #[arg(long)]
        no_flip: bool,
        /// Destination pairs to draw
        #[arg(long, default_value_t = 10)]
        destinations: usize,
        #[arg(long, default_value = "destinations.json")]
        out: PathBuf,
    },
    /// Triangulate only and dump vertices, triangles, and connections
    Triangulate {
        #[command(flatten)]
        source: NodeSource,
        #[arg(long, default_value = "map.json")]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Generate {
            source,
            steps,
            no_duplicate,
            no_remove,
            no_flip,
            destinations,
            out,
        } => generate(
            source,
            MutateCfg {
                steps,
                enable_duplicate: !no_duplicate,
                enable_remove: !no_remove,
                enable_flip: !no_flip,
            },
            destinations,
            out,
            cmd.seed,
        ),
        Action::Triangulate { source, out } => triangulate_only(source, out, cmd.seed),
    }
}

/// Resolve the node source and fix the insertion order.
///
/// The shuffle draws from token index 0; later passes use indices 1..=3 so
/// one seed replays the whole pipeline.
fn source_nodes(source: &NodeSource, seed: u64) -> Result<Vec<NamedNode>> {
    let nodes = match (&source.nodes, source.random) {
        (Some(path), None) => nodes::load_nodes(path)?,
        (None, Some(count)) => nodes::random_nodes(count, ReplayToken::new(seed, 0)),
        // clap's conflicts_with already rejects the both-given case.
        _ => bail!("one of --nodes or --random is required"),
    };
    if source.shuffle {
        let mut rng = ReplayToken::new(seed, 0).to_std_rng();
        Ok(shuffled(&nodes, &mut rng))
    } else {
        Ok(nodes)
    }
}

fn build_map(source: &NodeSource, seed: u64) -> Result<(Vec<NamedNode>, Shape, RouteMap)> {
    let nodes = source_nodes(source, seed)?;
    let points: Vec<_> = nodes.iter().map(|n| n.position).collect();
    let cfg = TriangulateCfg {
        scale_modifier: source.scale,
        geom: GeomCfg::default(),
    };
    let shape = triangulate(&points, cfg).context("triangulating input nodes")?;
    let map = build_route_map(&shape, ReplayToken::new(seed, 1));
    tracing::info!(
        vertices = shape.vertices.len(),
        triangles = shape.triangles.len(),
        connections = map.connections.len(),
        "map built"
    );
    Ok((nodes, shape, map))
}

/// The persisted destinations shape; consumers parse it field for field, so
/// the key names are a compatibility contract.
#[derive(Serialize)]
struct DestinationRecord {
    start: String,
    finish: String,
    value: u32,
}

#[derive(Serialize)]
struct DestinationsFile {
    destinations: Vec<DestinationRecord>,
}

fn generate(
    source: NodeSource,
    mutate_cfg: MutateCfg,
    destination_count: usize,
    out: PathBuf,
    seed: u64,
) -> Result<()> {
    let (nodes, shape, mut map) = build_map(&source, seed)?;

    let report = mutate(&mut map, &shape, mutate_cfg, ReplayToken::new(seed, 2));
    tracing::info!(
        applied = report.total_applied(),
        skipped = report.total_skipped(),
        "mutation rounds"
    );

    let cfg = DestinationCfg {
        count: destination_count,
        search: SearchCfg::default(),
    };
    let dests = generate_destinations(&map, &shape.vertices, cfg, ReplayToken::new(seed, 3))
        .context("drawing destination pairs")?;
    if dests.len() < destination_count {
        tracing::warn!(
            requested = destination_count,
            drawn = dests.len(),
            "destination pool ran dry"
        );
    }

    let file = DestinationsFile {
        destinations: dests
            .iter()
            .map(|d| DestinationRecord {
                start: nodes[d.start.0].name.clone(),
                finish: nodes[d.finish.0].name.clone(),
                value: d.value,
            })
            .collect(),
    };
    write_json(&out, &file)?;

    let payload = sidecar_payload(
        &source,
        seed,
        serde_json::json!({
            "steps": mutate_cfg.steps,
            "enable_duplicate": mutate_cfg.enable_duplicate,
            "enable_remove": mutate_cfg.enable_remove,
            "enable_flip": mutate_cfg.enable_flip,
            "destinations": destination_count,
        }),
    );
    provenance::write_sidecar(&out, payload)?;
    tracing::info!(out = %out.display(), count = file.destinations.len(), "destinations written");
    Ok(())
}

#[derive(Serialize)]
struct VertexRecord {
    name: String,
    x: f64,
    y: f64,
}

#[derive(Serialize)]
struct RouteRecord {
    length: u32,
    color: &'static str,
    taken: bool,
}

#[derive(Serialize)]
struct ConnectionRecord {
    a: usize,
    b: usize,
    routes: Vec<RouteRecord>,
}

#[derive(Serialize)]
struct MapFile {
    vertices: Vec<VertexRecord>,
    triangles: Vec<[usize; 3]>,
    connections: Vec<ConnectionRecord>,
}

fn triangulate_only(source: NodeSource, out: PathBuf, seed: u64) -> Result<()> {
    let (nodes, shape, map) = build_map(&source, seed)?;

    let file = MapFile {
        vertices: nodes
            .iter()
            .map(|n| VertexRecord {
                name: n.name.clone(),
                x: n.position.x,
                y: n.position.y,
            })
            .collect(),
        triangles: shape
            .triangles
            .iter()
            .map(|t| [t.a.0, t.b.0, t.c.0])
            .collect(),
        connections: map
            .connections
            .iter()
            .map(|c| ConnectionRecord {
                a: c.a.0,
                b: c.b.0,
                routes: c
                    .routes
                    .iter()
                    .flatten()
                    .map(|r| RouteRecord {
                        length: r.length,
                        color: r.color.name(),
                        taken: r.taken,
                    })
                    .collect(),
            })
            .collect(),
    };
    write_json(&out, &file)?;

    let payload = sidecar_payload(&source, seed, serde_json::json!({}));
    provenance::write_sidecar(&out, payload)?;
    tracing::info!(out = %out.display(), "map dump written");
    Ok(())
}

fn sidecar_payload(source: &NodeSource, seed: u64, extra: serde_json::Value) -> Payload {
    let mut params = serde_json::json!({
        "seed": seed,
        "shuffle": source.shuffle,
        "scale": source.scale,
        "random": source.random,
    });
    if let (Some(obj), Some(more)) = (params.as_object_mut(), extra.as_object()) {
        obj.extend(more.clone());
    }
    let mut payload = Payload::new(params);
    if let Some(path) = &source.nodes {
        payload = payload.with_input(path.to_string_lossy());
    }
    payload
}

fn write_json<T: Serialize>(out: &Path, value: &T) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn unit_square_source(dir: &Path) -> NodeSource {
        let path = dir.join("nodes.json");
        std::fs::write(
            &path,
            r#"[
                {"name": "Avon", "x": 0.0, "y": 0.0},
                {"name": "Brightwater", "x": 1.0, "y": 0.0},
                {"name": "Cardwell", "x": 1.0, "y": 1.0},
                {"name": "Durness", "x": 0.0, "y": 1.0}
            ]"#,
        )
        .unwrap();
        NodeSource {
            nodes: Some(path),
            random: None,
            shuffle: false,
            scale: 1.0,
        }
    }

    #[test]
    fn generate_writes_the_contract_shape() {
        let dir = tempdir().unwrap();
        let source = unit_square_source(dir.path());
        let out = dir.path().join("out/destinations.json");
        let cfg = MutateCfg {
            steps: 0,
            ..MutateCfg::default()
        };
        generate(source, cfg, 3, out.clone(), 11).unwrap();

        let parsed: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        let dests = parsed["destinations"].as_array().unwrap();
        assert_eq!(dests.len(), 3);
        for d in dests {
            assert!(d["start"].is_string());
            assert!(d["finish"].is_string());
            assert!(d["value"].as_u64().unwrap() >= 1);
            assert_ne!(d["start"], d["finish"]);
        }
        assert!(dir.path().join("out/destinations.provenance.json").exists());
    }

    #[test]
    fn generate_replays_bit_for_bit() {
        let dir = tempdir().unwrap();
        let out_a = dir.path().join("a.json");
        let out_b = dir.path().join("b.json");
        for out in [&out_a, &out_b] {
            let source = unit_square_source(dir.path());
            generate(source, MutateCfg::default(), 4, out.clone(), 7).unwrap();
        }
        assert_eq!(
            std::fs::read(&out_a).unwrap(),
            std::fs::read(&out_b).unwrap()
        );
    }

    #[test]
    fn triangulate_dumps_the_unit_square() {
        let dir = tempdir().unwrap();
        let source = unit_square_source(dir.path());
        let out = dir.path().join("map.json");
        triangulate_only(source, out.clone(), 0).unwrap();

        let parsed: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(parsed["vertices"].as_array().unwrap().len(), 4);
        assert_eq!(parsed["triangles"].as_array().unwrap().len(), 2);
        assert_eq!(parsed["connections"].as_array().unwrap().len(), 5);
        assert_eq!(parsed["vertices"][0]["name"], "Avon");
        for c in parsed["connections"].as_array().unwrap() {
            let routes = c["routes"].as_array().unwrap();
            assert_eq!(routes.len(), 1);
            let len = routes[0]["length"].as_u64().unwrap();
            assert!((1..=6).contains(&len));
        }
    }

    #[test]
    fn missing_source_is_an_error() {
        let source = NodeSource {
            nodes: None,
            random: None,
            shuffle: false,
            scale: 1.0,
        };
        assert!(source_nodes(&source, 0).is_err());
    }

    #[test]
    fn shuffle_permutes_but_keeps_the_node_set() {
        let source = NodeSource {
            nodes: None,
            random: Some(12),
            shuffle: true,
            scale: 1.0,
        };
        let shuffled_nodes = source_nodes(&source, 5).unwrap();
        let plain = nodes::random_nodes(12, ReplayToken::new(5, 0));
        assert_ne!(shuffled_nodes, plain);
        let mut a: Vec<String> = shuffled_nodes.iter().map(|n| n.name.clone()).collect();
        let mut b: Vec<String> = plain.iter().map(|n| n.name.clone()).collect();
        a.sort();
        b.sort();
        assert_eq!(a, b);
    }
}
