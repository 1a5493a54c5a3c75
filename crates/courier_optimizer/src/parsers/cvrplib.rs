use std::path::Path;

use anyhow::{Context, anyhow, bail};
use geo::Coord;

use crate::{
    parsers::parser::DatasetParser,
    problem::{
        delivery_problem::{DeliveryProblem, DeliveryProblemBuilder},
        point::{PointBuilder, PointId},
    },
};

/// Reads CVRPLIB `.vrp` instances.
///
/// The first depot becomes point 0, every other node is a regular delivery numbered from 1
/// in file order. Additional depots are dropped. Points are named after their CVRPLIB node.
pub struct CVRPLibParser;

impl DatasetParser for CVRPLibParser {
    fn parse<P: AsRef<Path>>(&self, file: P) -> Result<DeliveryProblem, anyhow::Error> {
        let file = file.as_ref();
        let content = std::fs::read_to_string(file)
            .with_context(|| format!("Cannot read {}", file.display()))?;

        let instance = parse(&content)?;
        instance.into_problem()
    }
}

#[derive(Debug, Clone)]
pub struct CvrpInstance {
    pub name: Option<String>,
    pub dimension: usize,
    pub capacity: f64,
    pub coords: Vec<Coord<f64>>,
    pub demands: Vec<f64>,
    /// 0-based node indices.
    pub depots: Vec<usize>,
}

impl CvrpInstance {
    pub fn into_problem(self) -> Result<DeliveryProblem, anyhow::Error> {
        let depot = self.depots.first().copied().unwrap_or(0);
        let depot_coord = self
            .coords
            .get(depot)
            .ok_or_else(|| anyhow!("Depot {} is not a node", depot + 1))?;

        let mut depot_builder = PointBuilder::default();
        depot_builder
            .set_id(PointId::DEPOT)
            .set_name(format!("{}", depot + 1))
            .set_location((depot_coord.x, depot_coord.y));

        let mut points = vec![depot_builder.build()];

        let deliveries = self
            .coords
            .iter()
            .zip(&self.demands)
            .enumerate()
            .filter(|(node, _)| !self.depots.contains(node) && *node != depot);

        for (id, (node, (coord, &demand))) in deliveries.enumerate() {
            let mut builder = PointBuilder::default();
            builder
                .set_id(id + 1)
                .set_name(format!("{}", node + 1))
                .set_location((coord.x, coord.y))
                .set_load(demand);

            points.push(builder.build());
        }

        let mut builder = DeliveryProblemBuilder::default();
        builder.set_points(points).set_capacity(self.capacity);

        Ok(builder.build()?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Section {
    Header,
    NodeCoords,
    Demands,
    Depots,
    Ignored,
}

fn parse_field<T: std::str::FromStr>(value: Option<&str>, what: &str) -> Result<T, anyhow::Error> {
    let value = value.ok_or_else(|| anyhow!("Missing {what}"))?;
    value
        .parse()
        .map_err(|_| anyhow!("Invalid {what}: {value}"))
}

pub fn parse(text: &str) -> Result<CvrpInstance, anyhow::Error> {
    let mut name = None;
    let mut dimension: Option<usize> = None;
    let mut capacity: Option<f64> = None;
    let mut coords: Vec<Coord<f64>> = vec![];
    let mut demands: Vec<f64> = vec![];
    let mut depots: Vec<usize> = vec![];

    let mut section = Section::Header;

    for line in text.lines().map(str::trim) {
        if line.is_empty() {
            continue;
        }

        if line == "EOF" {
            break;
        }

        if line.ends_with("SECTION") {
            section = match line {
                "NODE_COORD_SECTION" => Section::NodeCoords,
                "DEMAND_SECTION" => Section::Demands,
                "DEPOT_SECTION" => Section::Depots,
                _ => Section::Ignored,
            };
            continue;
        }

        match section {
            Section::Header => {
                let Some((key, value)) = line.split_once(':') else {
                    continue;
                };

                let value = value.trim();
                match key.trim().to_uppercase().as_str() {
                    "NAME" => name = Some(value.to_owned()),
                    "DIMENSION" => dimension = Some(parse_field(Some(value), "dimension")?),
                    "CAPACITY" => capacity = Some(parse_field(Some(value), "capacity")?),
                    "EDGE_WEIGHT_TYPE" if value != "EUC_2D" => {
                        bail!("Unsupported edge weight type: {value}")
                    }
                    _ => {}
                }
            }
            Section::NodeCoords => {
                let mut parts = line.split_whitespace().skip(1);
                let x = parse_field(parts.next(), "x coordinate")?;
                let y = parse_field(parts.next(), "y coordinate")?;
                coords.push(Coord { x, y });
            }
            Section::Demands => {
                let mut parts = line.split_whitespace().skip(1);
                demands.push(parse_field(parts.next(), "demand")?);
            }
            Section::Depots => {
                for part in line.split_whitespace() {
                    let node: i64 = parse_field(Some(part), "depot index")?;
                    if node == -1 {
                        section = Section::Ignored;
                        break;
                    }

                    if node < 1 {
                        bail!("Invalid depot index: {node}");
                    }

                    depots.push((node - 1) as usize);
                }
            }
            Section::Ignored => {}
        }
    }

    let dimension = dimension.ok_or_else(|| anyhow!("Missing DIMENSION"))?;
    let capacity = capacity.ok_or_else(|| anyhow!("Missing CAPACITY"))?;

    if coords.is_empty() {
        bail!("Missing NODE_COORD_SECTION");
    }

    if demands.is_empty() {
        bail!("Missing DEMAND_SECTION");
    }

    if coords.len() != dimension || demands.len() != dimension {
        bail!(
            "Expected {dimension} nodes, found {} coordinates and {} demands",
            coords.len(),
            demands.len()
        );
    }

    if let Some(depot) = depots.iter().find(|&&depot| depot >= dimension) {
        bail!("Depot {} is not a node", depot + 1);
    }

    if depots.is_empty() {
        depots.push(0);
    }

    Ok(CvrpInstance {
        name,
        dimension,
        capacity,
        coords,
        demands,
        depots,
    })
}

/// Best known cost from a CVRPLIB `.sol` file, the last `Cost` line wins.
pub fn parse_solution_file<P: AsRef<Path>>(path: P) -> Option<f64> {
    let content = std::fs::read_to_string(path).ok()?;

    content
        .lines()
        .rev()
        .find_map(|line| line.trim().strip_prefix("Cost"))
        .and_then(|cost| cost.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
NAME : P-n6-k2
COMMENT : (hand made)
TYPE : CVRP
DIMENSION : 6
EDGE_WEIGHT_TYPE : EUC_2D
CAPACITY : 30
NODE_COORD_SECTION
 1 10 10
 2 20 10
 3 30 10
 4 10 20
 5 10 30
 6 40 40
DEMAND_SECTION
1 7
2 10
3 10
4 0
5 15
6 15
DEPOT_SECTION
 4
 -1
EOF
"#;

    #[test]
    fn test_parse() {
        let instance = parse(SAMPLE).unwrap();

        assert_eq!(instance.name.as_deref(), Some("P-n6-k2"));
        assert_eq!(instance.dimension, 6);
        assert_eq!(instance.capacity, 30.0);
        assert_eq!(instance.coords.len(), 6);
        assert_eq!(instance.demands.len(), 6);
        assert_eq!(instance.depots, vec![3]);

        assert_eq!(instance.coords[5], Coord { x: 40.0, y: 40.0 });
        assert_eq!(instance.demands[4], 15.0);
    }

    #[test]
    fn test_depot_becomes_point_zero() {
        let problem = parse(SAMPLE).unwrap().into_problem().unwrap();

        assert_eq!(problem.capacity(), 30.0);
        assert_eq!(problem.number_of_deliveries(), 5);

        let depot = problem.depot();
        assert_eq!(depot.name(), Some("4"));
        assert_eq!(depot.location().x(), 10.0);
        assert_eq!(depot.location().y(), 20.0);

        // Node 5 comes after the depot in the file, it keeps its relative order
        let fourth = problem.point(PointId::new(4)).unwrap();
        assert_eq!(fourth.name(), Some("5"));
        assert_eq!(fourth.load(), 15.0);
        assert!(!fourth.is_critical());

        assert_eq!(problem.total_load(), 57.0);
    }

    #[test]
    fn test_missing_depot_section_defaults_to_first_node() {
        let text = SAMPLE.replace("DEPOT_SECTION\n 4\n -1\n", "");
        let instance = parse(&text).unwrap();

        assert_eq!(instance.depots, vec![0]);
    }

    #[test]
    fn test_missing_capacity() {
        let text = SAMPLE.replace("CAPACITY : 30\n", "");

        assert!(parse(&text).is_err());
    }

    #[test]
    fn test_dimension_mismatch() {
        let text = SAMPLE.replace("DIMENSION : 6", "DIMENSION : 7");

        assert!(parse(&text).is_err());
    }

    #[test]
    fn test_invalid_coordinate() {
        let text = SAMPLE.replace(" 3 30 10", " 3 thirty 10");
        let error = parse(&text).unwrap_err();

        assert_eq!(error.to_string(), "Invalid x coordinate: thirty");
    }

    #[test]
    fn test_unsupported_edge_weight_type() {
        let text = SAMPLE.replace("EUC_2D", "GEO");

        assert!(parse(&text).is_err());
    }

    #[test]
    fn test_parse_solution_file() {
        let dir = std::env::temp_dir().join("courier_cvrplib_solution_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("P-n6-k2.sol");
        std::fs::write(&path, "Route #1: 1 2\nRoute #2: 3 4 5\nCost 118\n").unwrap();

        assert_eq!(parse_solution_file(&path), Some(118.0));
        assert_eq!(parse_solution_file(dir.join("missing.sol")), None);
    }
}
