//! Seeded synthetic passenger traffic.

use lift_core::{BuildingConfig, CarId, Floor, HallDirection, SimRng, Tick};

use crate::{Event, EventQueue};

/// Generates random hall and car calls for a building.
///
/// Each tick, a hall call appears with probability `hall_rate` at a uniform
/// random floor (up from the ground floor, down from the top floor, either
/// way elsewhere), and each car independently receives a car call with
/// probability `car_rate`.  The same seed always yields the same stream.
pub struct TrafficGenerator {
    rng:        SimRng,
    num_floors: u32,
    num_cars:   u32,
    hall_rate:  f64,
    car_rate:   f64,
}

impl TrafficGenerator {
    pub fn new(config: &BuildingConfig, seed: u64) -> Self {
        Self {
            rng:        SimRng::new(seed),
            num_floors: config.num_floors,
            num_cars:   config.num_cars,
            hall_rate:  0.3,
            car_rate:   0.05,
        }
    }

    pub fn with_hall_rate(mut self, p: f64) -> Self {
        self.hall_rate = p;
        self
    }

    pub fn with_car_rate(mut self, p: f64) -> Self {
        self.car_rate = p;
        self
    }

    /// Events for one tick.
    pub fn events_for_tick(&mut self) -> Vec<Event> {
        let mut events = vec![];
        // Buildings the dispatcher would reject produce no traffic.
        if self.num_floors < 2 {
            return events;
        }
        let Ok(top) = Floor::try_from(self.num_floors - 1) else {
            return events;
        };

        if self.rng.gen_bool(self.hall_rate) {
            let floor: Floor = self.rng.gen_range(0..=top);
            let direction = match floor {
                0 => HallDirection::Up,
                f if f == top => HallDirection::Down,
                _ if self.rng.gen_bool(0.5) => HallDirection::Up,
                _ => HallDirection::Down,
            };
            events.push(Event::HallCall { floor, direction });
        }

        for car in 0..self.num_cars {
            if self.rng.gen_bool(self.car_rate) {
                let floor: Floor = self.rng.gen_range(0..=top);
                events.push(Event::CarCall { car: CarId(car), floor });
            }
        }
        events
    }

    /// Generate events for ticks `0..ticks`.
    pub fn generate(&mut self, ticks: u64) -> EventQueue {
        let mut queue = EventQueue::new();
        for t in 0..ticks {
            for event in self.events_for_tick() {
                queue.push(Tick(t), event);
            }
        }
        queue
    }
}
