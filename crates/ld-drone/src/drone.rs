//! The drone agent.

use std::collections::VecDeque;

use tracing::{info, warn};

use ld_core::{Heading, LngLat, LocationId};
use ld_world::{LegPlanner, Route, WorldMap};

use crate::{
    DroneError, DroneResult, EscapeStrategy, FlightRecorder, LegPhase, LegTarget, StepPlanner,
    StepRecord,
};

/// A single drone flying over a [`WorldMap`].
///
/// Created once at the home base with a fixed move budget and mutated step
/// by step for the whole run.  The budget is decremented by exactly one for
/// every committed step, hovers included, and by nothing else.
pub struct Drone {
    position:   LngLat,
    location:   LocationId,
    moves_left: u32,
    heading:    Heading,
    target:     Option<LegTarget>,
    phase:      LegPhase,
    /// Keypoints (shops, then delivery) still to visit for the current order.
    itinerary:  VecDeque<LocationId>,
    /// Route skeleton for the current leg.
    waypoints:  VecDeque<LocationId>,
    /// Every position the drone has occupied, starting at home.
    path:       Vec<LngLat>,
    steps:      StepPlanner,
}

impl Drone {
    /// Place a new drone at the world's home base.
    pub fn new(world: &WorldMap, moves: u32, escape: EscapeStrategy) -> Self {
        let home = world.point(world.home());
        Self {
            position:   home,
            location:   world.home(),
            moves_left: moves,
            heading:    Heading::HOVER,
            target:     None,
            phase:      LegPhase::Arrived,
            itinerary:  VecDeque::new(),
            waypoints:  VecDeque::new(),
            path:       vec![home],
            steps:      StepPlanner::new(escape),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn position(&self) -> LngLat {
        self.position
    }

    /// Last named location the drone arrived at.
    pub fn location(&self) -> LocationId {
        self.location
    }

    pub fn moves_left(&self) -> u32 {
        self.moves_left
    }

    /// Heading of the last committed step.
    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn target(&self) -> Option<LegTarget> {
        self.target
    }

    pub fn phase(&self) -> LegPhase {
        self.phase
    }

    pub fn is_arrived(&self) -> bool {
        self.phase == LegPhase::Arrived
    }

    /// Visited positions in order, starting with the home base.
    pub fn path(&self) -> &[LngLat] {
        &self.path
    }

    pub fn into_path(self) -> Vec<LngLat> {
        self.path
    }

    // ── Itinerary ─────────────────────────────────────────────────────────

    /// Replace the keypoints for the current order.
    pub fn set_itinerary(&mut self, keypoints: impl IntoIterator<Item = LocationId>) {
        self.itinerary = keypoints.into_iter().collect();
    }

    pub fn next_keypoint(&mut self) -> Option<LocationId> {
        self.itinerary.pop_front()
    }

    pub fn remaining_keypoints(&self) -> usize {
        self.itinerary.len()
    }

    // ── Leg control ───────────────────────────────────────────────────────

    /// Start a leg toward `location`.
    ///
    /// If the drone is already within arrival tolerance of the target the
    /// leg is complete at once and costs no moves.
    pub fn set_target(&mut self, world: &WorldMap, location: LocationId) {
        let point = world.point(location);
        self.target = Some(LegTarget { location, point });
        self.phase = LegPhase::Planning;
        if self.position.close_to(point) {
            self.arrive(location);
        }
    }

    fn arrive(&mut self, location: LocationId) {
        self.phase = LegPhase::Arrived;
        self.location = location;
        self.steps.reset();
    }

    /// Take one step toward the current target.
    pub fn step(
        &mut self,
        world:    &WorldMap,
        order:    Option<&str>,
        recorder: &mut impl FlightRecorder,
    ) -> DroneResult<()> {
        let target = self.target.ok_or(DroneError::NoTarget)?;
        self.ensure_budget(target.point)?;
        let desired = Heading::toward(self.position, target.point);
        let heading = self.steps.resolve(world, self.position, desired)?;
        self.commit(heading, order, recorder);
        Ok(())
    }

    /// Step until the current target is reached.
    pub fn follow_leg(
        &mut self,
        world:    &WorldMap,
        order:    Option<&str>,
        recorder: &mut impl FlightRecorder,
    ) -> DroneResult<()> {
        while !self.is_arrived() {
            self.step(world, order, recorder)?;
        }
        Ok(())
    }

    /// Fly the route skeleton one waypoint at a time.
    pub fn follow_waypoints(
        &mut self,
        world:     &WorldMap,
        waypoints: impl IntoIterator<Item = LocationId>,
        order:     Option<&str>,
        recorder:  &mut impl FlightRecorder,
    ) -> DroneResult<()> {
        self.waypoints = waypoints.into_iter().collect();
        while let Some(next) = self.waypoints.pop_front() {
            self.set_target(world, next);
            self.follow_leg(world, order, recorder)?;
        }
        Ok(())
    }

    /// Replay a planned heading sequence toward the current target.
    ///
    /// Each hop is re-checked before it is flown; a blocked one is replaced
    /// by the escape search.  If the replay ends short of the target the leg
    /// is finished by normal stepping.
    pub fn execute_headings(
        &mut self,
        world:    &WorldMap,
        headings: &[Heading],
        order:    Option<&str>,
        recorder: &mut impl FlightRecorder,
    ) -> DroneResult<()> {
        let target = self.target.ok_or(DroneError::NoTarget)?;
        for &planned in headings {
            if self.is_arrived() {
                break;
            }
            self.ensure_budget(target.point)?;
            let mut heading = planned;
            if world.blocked(self.position, self.position.next_position(planned)) {
                warn!(at = %self.position, %planned, "planned hop crosses a no-fly zone");
                heading = self.steps.resolve(world, self.position, planned)?;
            }
            self.commit(heading, order, recorder);
        }
        self.follow_leg(world, order, recorder)
    }

    /// Fly from the current location to `keypoint`.
    ///
    /// Uses the precomputed route when it is reliable, and `planner`
    /// otherwise.
    pub fn fly_to(
        &mut self,
        world:    &WorldMap,
        planner:  &impl LegPlanner,
        keypoint: LocationId,
        order:    Option<&str>,
        recorder: &mut impl FlightRecorder,
    ) -> DroneResult<()> {
        match world.route(self.location, keypoint)? {
            Route::Waypoints(waypoints) => {
                self.follow_waypoints(world, waypoints, order, recorder)?;
                // An empty skeleton still has to settle on the keypoint.
                self.set_target(world, keypoint);
                self.follow_leg(world, order, recorder)
            }
            Route::Unreliable => {
                info!(
                    from = world.name(self.location),
                    to = world.name(keypoint),
                    "route crosses a no-fly zone, planning leg with A*"
                );
                self.set_target(world, keypoint);
                if self.is_arrived() {
                    return Ok(());
                }
                let headings = planner.plan(world, self.position, world.point(keypoint))?;
                self.execute_headings(world, &headings, order, recorder)
            }
        }
    }

    /// Spend one move in place.
    pub fn hover(&mut self, order: Option<&str>, recorder: &mut impl FlightRecorder) -> DroneResult<()> {
        self.ensure_budget(self.position)?;
        self.commit(Heading::HOVER, order, recorder);
        Ok(())
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn ensure_budget(&self, target: LngLat) -> DroneResult<()> {
        if self.moves_left == 0 {
            return Err(DroneError::Stuck { target, moves_left: 0 });
        }
        Ok(())
    }

    fn commit(&mut self, heading: Heading, order: Option<&str>, recorder: &mut impl FlightRecorder) {
        let from = self.position;
        let to = from.next_position(heading);
        recorder.record(&StepRecord { order: order.map(str::to_owned), from, heading, to });

        self.position = to;
        self.heading = heading;
        self.path.push(to);
        self.moves_left -= 1;

        if heading.is_hover() || self.is_arrived() {
            return;
        }
        self.phase = LegPhase::Stepping;
        if let Some(target) = self.target {
            if to.close_to(target.point) {
                self.arrive(target.location);
            }
        }
    }
}
