//! Tuning of the layout engine's forces.

use log::debug;

use crate::config::LayoutConfig;

/// Force settings of a running layout engine. Values are picked up on the
/// engine's next physics step.
pub trait Simulation {
	/// Charge between every node pair. Negative repels.
	fn set_charge_strength(&mut self, strength: f64);
	/// Rest length of link springs.
	fn set_link_distance(&mut self, distance: f64);
}

/// Applies the configured forces. Called on every data set change.
///
/// Without an engine (the canvas has not mounted yet) this does nothing; the
/// next data change applies the forces again.
pub fn configure_layout<S: Simulation>(simulation: Option<&mut S>, config: &LayoutConfig) {
	let Some(simulation) = simulation else {
		debug!("layout engine not ready, skipping force configuration");
		return;
	};
	simulation.set_charge_strength(config.charge_strength);
	simulation.set_link_distance(config.link_distance);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[derive(Default)]
	struct Forces {
		charge: Option<f64>,
		distance: Option<f64>,
		calls: usize,
	}

	impl Simulation for Forces {
		fn set_charge_strength(&mut self, strength: f64) {
			self.charge = Some(strength);
			self.calls += 1;
		}

		fn set_link_distance(&mut self, distance: f64) {
			self.distance = Some(distance);
			self.calls += 1;
		}
	}

	#[test]
	fn applies_default_forces() {
		let mut forces = Forces::default();
		configure_layout(Some(&mut forces), &LayoutConfig::default());
		assert_eq!(forces.charge, Some(-400.0));
		assert_eq!(forces.distance, Some(100.0));

		configure_layout(Some(&mut forces), &LayoutConfig::default());
		assert_eq!(forces.calls, 4);
	}

	#[test]
	fn missing_engine_is_a_no_op() {
		configure_layout::<Forces>(None, &LayoutConfig::default());
	}
}
