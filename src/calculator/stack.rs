use serde::Serialize;
use tracing::debug;

use super::{
    BreakdownTerm, CalculatorDecorator, Decorator, DefaultSportsCalculator, SportsCalculator,
};
use crate::models::Multiplier;

/// A base calculator wrapped by an ordered list of decorators.
///
/// `layers[0]` wraps the base directly and the last layer is the outermost.
/// The stack is immutable; callers build a new one whenever inputs change.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CalculatorStack {
    #[serde(skip)]
    base: DefaultSportsCalculator,
    layers: Vec<Decorator>,
}

impl CalculatorStack {
    pub fn builder(base: DefaultSportsCalculator) -> CalculatorStackBuilder {
        CalculatorStackBuilder::new(base)
    }

    pub fn base(&self) -> &DefaultSportsCalculator {
        &self.base
    }

    pub fn layers(&self) -> &[Decorator] {
        &self.layers
    }

    /// Layer names, innermost first.
    pub fn layer_names(&self) -> Vec<&'static str> {
        self.layers.iter().map(|layer| layer.name()).collect()
    }

    fn chain(&self) -> Chain<'_> {
        Chain {
            base: &self.base,
            layers: &self.layers,
        }
    }
}

/// The calculator formed by `base` and a prefix of the stack's layers.
struct Chain<'a> {
    base: &'a DefaultSportsCalculator,
    layers: &'a [Decorator],
}

impl<'a> Chain<'a> {
    /// Splits off the outermost layer and the chain it wraps.
    fn outermost(&self) -> Option<(&'a Decorator, Chain<'a>)> {
        let (outer, rest) = self.layers.split_last()?;
        Some((
            outer,
            Chain {
                base: self.base,
                layers: rest,
            },
        ))
    }
}

impl SportsCalculator for Chain<'_> {
    fn get(&self, sport: &str, game: &str) -> f64 {
        match self.outermost() {
            Some((outer, inner)) => outer.get(&inner, sport, game),
            None => self.base.get(sport, game),
        }
    }

    fn calculate_amount(&self, sport: &str, game: &str, deaths: f64) -> u32 {
        match self.outermost() {
            Some((outer, inner)) => outer.calculate_amount(&inner, sport, game, deaths),
            None => self.base.calculate_amount(sport, game, deaths),
        }
    }

    fn calculate_deaths(&self, sport: &str, game: &str, amount: f64) -> u32 {
        match self.outermost() {
            Some((outer, inner)) => outer.calculate_deaths(&inner, sport, game, amount),
            None => self.base.calculate_deaths(sport, game, amount),
        }
    }

    fn get_game_base(&self, game: &str) -> f64 {
        match self.outermost() {
            Some((outer, inner)) => outer.get_game_base(&inner, game),
            None => self.base.get_game_base(game),
        }
    }

    fn get_sport_base(&self, sport: &str) -> f64 {
        match self.outermost() {
            Some((outer, inner)) => outer.get_sport_base(&inner, sport),
            None => self.base.get_sport_base(sport),
        }
    }

    fn get_multiplier(&self, sport: &str, game: &str) -> Option<Multiplier> {
        match self.outermost() {
            Some((outer, inner)) => outer.get_multiplier(&inner, sport, game),
            None => self.base.get_multiplier(sport, game),
        }
    }

    fn explain(&self, sport: &str, game: &str, deaths: f64) -> Vec<BreakdownTerm> {
        match self.outermost() {
            Some((outer, inner)) => outer.explain(&inner, sport, game, deaths),
            None => self.base.explain(sport, game, deaths),
        }
    }
}

impl SportsCalculator for CalculatorStack {
    fn get(&self, sport: &str, game: &str) -> f64 {
        self.chain().get(sport, game)
    }

    fn calculate_amount(&self, sport: &str, game: &str, deaths: f64) -> u32 {
        self.chain().calculate_amount(sport, game, deaths)
    }

    fn calculate_deaths(&self, sport: &str, game: &str, amount: f64) -> u32 {
        self.chain().calculate_deaths(sport, game, amount)
    }

    fn get_game_base(&self, game: &str) -> f64 {
        self.chain().get_game_base(game)
    }

    fn get_sport_base(&self, sport: &str) -> f64 {
        self.chain().get_sport_base(sport)
    }

    fn get_multiplier(&self, sport: &str, game: &str) -> Option<Multiplier> {
        self.chain().get_multiplier(sport, game)
    }

    fn explain(&self, sport: &str, game: &str, deaths: f64) -> Vec<BreakdownTerm> {
        self.chain().explain(sport, game, deaths)
    }
}

pub struct CalculatorStackBuilder {
    base: DefaultSportsCalculator,
    layers: Vec<Decorator>,
}

impl CalculatorStackBuilder {
    fn new(base: DefaultSportsCalculator) -> Self {
        Self {
            base,
            layers: Vec::new(),
        }
    }

    pub fn with_layer(mut self, layer: impl Into<Decorator>) -> Self {
        let layer = layer.into();
        debug!(
            layer = layer.name(),
            priority = layer.priority(),
            "Adding decorator layer"
        );
        self.layers.push(layer);
        self
    }

    /// Orders layers by priority. Layers of equal priority keep insertion order.
    pub fn build(mut self) -> CalculatorStack {
        self.layers.sort_by_key(|layer| layer.priority());
        CalculatorStack {
            base: self.base,
            layers: self.layers,
        }
    }
}
