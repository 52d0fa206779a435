//! Demo tooltip providers, one per world category. `CropProvider` and
//! `CritterProvider` use the two-phase match cache; `MachineProvider`
//! recomputes its state in both phases to show the stateless variant.

use bevy::prelude::*;

use hovertip::constants::DEFAULT_BADGE_SIZE;
use hovertip::theme;
use hovertip::tooltip::{
    Badge, BadgeAnchor, MatchCache, ProviderError, Tooltip, TooltipProvider, TooltipRegistry,
};

use super::world::{Critter, CropTile, FarmWorld, MachineTile};

#[derive(Default)]
pub struct CropProvider {
    cache: MatchCache<CropTile>,
}

fn growth_text(crop: &CropTile) -> String {
    if crop.dead {
        return "Dead".to_string();
    }
    match crop.days_left {
        0 => "Ready to harvest".to_string(),
        1 => "1 day left".to_string(),
        n => format!("{n} days left"),
    }
}

impl TooltipProvider<CropTile> for CropProvider {
    fn id(&self) -> &str {
        "demo.crops"
    }

    fn display_name(&self) -> String {
        "Crops".to_string()
    }

    fn description(&self) -> String {
        "Shows the days until a crop can be harvested.".to_string()
    }

    fn has_tooltip(&mut self, crop: &CropTile) -> bool {
        self.cache.store(crop.clone());
        true
    }

    fn generate(&mut self, _crop: &CropTile) -> Result<Tooltip, ProviderError> {
        let crop = self.cache.take()?;
        let mut tooltip = Tooltip::new(format!("{}\n{}", crop.name, growth_text(&crop)));
        if !crop.dead {
            let badge = Badge::placeholder(Vec2::splat(DEFAULT_BADGE_SIZE))
                .anchored(BadgeAnchor::CenterRight, Vec2::new(4.0, 0.0))
                .with_counter(crop.days_left, theme::counter_color_for_quality(0));
            tooltip = tooltip.with_badge(badge);
        }
        if crop.fertilized {
            let badge = Badge::placeholder(Vec2::splat(DEFAULT_BADGE_SIZE / 2.0))
                .anchored(BadgeAnchor::CenterRight, Vec2::new(4.0, 0.0));
            tooltip = tooltip.with_badge(badge);
        }
        Ok(tooltip)
    }
}

#[derive(Default)]
pub struct MachineProvider;

fn machine_status(machine: &MachineTile) -> String {
    match machine.minutes_left {
        0 => "Ready".to_string(),
        1 => "1 minute remaining".to_string(),
        n => format!("{n} minutes remaining"),
    }
}

impl TooltipProvider<MachineTile> for MachineProvider {
    fn id(&self) -> &str {
        "demo.machines"
    }

    fn display_name(&self) -> String {
        "Machines".to_string()
    }

    fn description(&self) -> String {
        "Shows how long a machine still needs to run.".to_string()
    }

    fn has_tooltip(&mut self, _machine: &MachineTile) -> bool {
        true
    }

    fn generate(&mut self, machine: &MachineTile) -> Result<Tooltip, ProviderError> {
        let mut tooltip = Tooltip::new(format!("{}\n{}", machine.name, machine_status(machine)));
        if machine.minutes_left == 0 {
            let badge = Badge::placeholder(Vec2::splat(DEFAULT_BADGE_SIZE / 2.0))
                .anchored(BadgeAnchor::TopRight, Vec2::new(2.0, 2.0));
            tooltip = tooltip.with_badge(badge);
        }
        Ok(tooltip)
    }
}

#[derive(Default)]
pub struct CritterProvider {
    cache: MatchCache<Critter>,
}

impl TooltipProvider<Critter> for CritterProvider {
    fn id(&self) -> &str {
        "demo.critters"
    }

    fn display_name(&self) -> String {
        "Critters".to_string()
    }

    fn description(&self) -> String {
        "Shows a critter's name and affection.".to_string()
    }

    fn has_tooltip(&mut self, critter: &Critter) -> bool {
        self.cache.store(critter.clone());
        true
    }

    fn generate(&mut self, _critter: &Critter) -> Result<Tooltip, ProviderError> {
        let critter = self.cache.take()?;
        let mut tooltip = Tooltip::new(format!(
            "{} the {}",
            critter.name, critter.species
        ));
        // one small heart badge per affection level, centered above the panel
        for _ in 0..critter.hearts {
            let badge = Badge::placeholder(Vec2::splat(DEFAULT_BADGE_SIZE / 2.0))
                .anchored(BadgeAnchor::TopCenter, Vec2::new(0.0, 2.0));
            tooltip = tooltip.with_badge(badge);
        }
        Ok(tooltip)
    }
}

/// Startup system wiring the demo providers into the overlay registry
pub fn register_providers(mut registry: ResMut<TooltipRegistry<FarmWorld>>) {
    registry.add_terrain(CropProvider::default());
    registry.add_object(MachineProvider::default());
    registry.add_character(CritterProvider::default());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crop(days_left: u32, dead: bool) -> CropTile {
        CropTile {
            tile: IVec2::ZERO,
            name: "Parsnip",
            days_left,
            dead,
            fertilized: false,
        }
    }

    #[test]
    fn test_growth_text_counts_down() {
        assert_eq!(growth_text(&crop(3, false)), "3 days left");
        assert_eq!(growth_text(&crop(1, false)), "1 day left");
        assert_eq!(growth_text(&crop(0, false)), "Ready to harvest");
        assert_eq!(growth_text(&crop(5, true)), "Dead");
    }

    #[test]
    fn test_crop_provider_two_phase_flow() {
        let mut provider = CropProvider::default();
        let crop = crop(3, false);

        assert!(provider.has_tooltip(&crop));
        let tooltip = provider.generate(&crop).unwrap();
        assert_eq!(tooltip.text, "Parsnip\n3 days left");
        assert_eq!(tooltip.badges.len(), 1);
        assert_eq!(tooltip.badges[0].counter, Some(3));
    }

    #[test]
    fn test_crop_generate_without_match_is_out_of_phase() {
        let mut provider = CropProvider::default();
        assert_eq!(
            provider.generate(&crop(3, false)),
            Err(ProviderError::OutOfPhase)
        );
    }

    #[test]
    fn test_dead_crop_gets_no_badges() {
        let mut provider = CropProvider::default();
        let dead = crop(5, true);
        assert!(provider.has_tooltip(&dead));
        let tooltip = provider.generate(&dead).unwrap();
        assert_eq!(tooltip.text, "Parsnip\nDead");
        assert!(tooltip.badges.is_empty());
    }

    #[test]
    fn test_machine_status_wording() {
        let furnace = MachineTile {
            tile: IVec2::ZERO,
            name: "Furnace",
            minutes_left: 40,
        };
        assert_eq!(machine_status(&furnace), "40 minutes remaining");

        let done = MachineTile {
            minutes_left: 0,
            ..furnace
        };
        assert_eq!(machine_status(&done), "Ready");
    }

    #[test]
    fn test_ready_machine_gets_a_badge() {
        let mut provider = MachineProvider;
        let jar = MachineTile {
            tile: IVec2::ZERO,
            name: "Preserves Jar",
            minutes_left: 0,
        };
        assert!(provider.has_tooltip(&jar));
        let tooltip = provider.generate(&jar).unwrap();
        assert_eq!(tooltip.badges.len(), 1);
        assert_eq!(tooltip.badges[0].anchor, BadgeAnchor::TopRight);
    }

    #[test]
    fn test_critter_hearts_become_badges() {
        let mut provider = CritterProvider::default();
        let hen = Critter {
            name: "Clementine",
            species: "chicken",
            pos: Vec2::ZERO,
            size: Vec2::splat(48.0),
            hearts: 4,
        };
        assert!(provider.has_tooltip(&hen));
        let tooltip = provider.generate(&hen).unwrap();
        assert_eq!(tooltip.text, "Clementine the chicken");
        assert_eq!(tooltip.badges.len(), 4);
        assert!(
            tooltip
                .badges
                .iter()
                .all(|b| b.anchor == BadgeAnchor::TopCenter)
        );
    }
}
