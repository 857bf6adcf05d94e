//! Per-day activity plans over a date range.

use rand::Rng;
use time::{Date, OffsetDateTime, Time};

use crate::config::ScheduleConfig;
use crate::error::SynthError;

/// Randomized parameters for one day's activity.
#[derive(Debug, Clone, PartialEq)]
pub struct DayPlan {
    pub date: Date,
    pub start: OffsetDateTime,
    pub duration_seconds: f64,
    pub distance_meters: f64,
    pub calories: u32,
    pub file_name: String,
}

/// Draws a [`DayPlan`] for every day of a [`ScheduleConfig`] range.
pub struct DayScheduler {
    config: ScheduleConfig,
}

impl DayScheduler {
    pub fn new(config: ScheduleConfig) -> Self {
        Self { config }
    }

    /// Returns one plan per day, in date order.
    pub fn plans(&self, rng: &mut impl Rng) -> Result<Vec<DayPlan>, SynthError> {
        self.validate()?;
        let (from, to) = self.config.date_range()?;
        if from > to {
            return Err(SynthError::InvalidInput(format!(
                "date range is inverted: {from} > {to}"
            )));
        }

        let mut plans = Vec::new();
        let mut date = from;
        loop {
            plans.push(self.plan_for(date, rng)?);
            if date == to {
                break;
            }
            date = date
                .next_day()
                .ok_or_else(|| SynthError::InvalidInput(format!("no day after {date}")))?;
        }

        Ok(plans)
    }

    /// Draws the start time, distance and duration for `date`.
    pub fn plan_for(&self, date: Date, rng: &mut impl Rng) -> Result<DayPlan, SynthError> {
        let (first_hour, last_hour) = self.config.start_hours;
        let (min_dist, max_dist) = self.config.distance_range_m;
        let (min_dur, max_dur) = self.config.duration_range_s;

        let time = Time::from_hms(
            rng.gen_range(first_hour..=last_hour),
            rng.gen_range(0..60),
            rng.gen_range(0..60),
        )?;
        let distance_meters = rng.gen_range(min_dist..=max_dist).round();
        let duration_seconds = rng.gen_range(min_dur..=max_dur).round();

        Ok(DayPlan {
            date,
            start: date.with_time(time).assume_utc(),
            duration_seconds,
            distance_meters,
            calories: self.config.calories.calories(distance_meters),
            file_name: file_name(&self.config.file_template, date),
        })
    }

    fn validate(&self) -> Result<(), SynthError> {
        let (first_hour, last_hour) = self.config.start_hours;
        if first_hour > last_hour || last_hour > 23 {
            return Err(SynthError::InvalidInput(format!(
                "invalid start hours {first_hour}..={last_hour}"
            )));
        }

        let ranges = [
            ("distance", self.config.distance_range_m),
            ("duration", self.config.duration_range_s),
        ];
        for (name, (min, max)) in ranges {
            // Rounded draws must stay positive
            if !(min >= 1.0 && min <= max && max.is_finite()) {
                return Err(SynthError::InvalidInput(format!(
                    "invalid {name} range {min}..={max}"
                )));
            }
        }

        Ok(())
    }
}

/// Fills `{month}` and `{day}` in `template` with unpadded numbers.
pub fn file_name(template: &str, date: Date) -> String {
    template
        .replace("{month}", &u8::from(date.month()).to_string())
        .replace("{day}", &date.day().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use time::macros::date;

    use crate::config::CalorieModel;

    fn may(from: &str, to: &str) -> ScheduleConfig {
        ScheduleConfig {
            from: from.to_string(),
            to: to.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_file_name_template() {
        assert_eq!(file_name("{month}_{day}.tcx", date!(2024 - 05 - 01)), "5_1.tcx");
        assert_eq!(
            file_name("runs/{month}/{day}.tcx", date!(2024 - 12 - 31)),
            "runs/12/31.tcx"
        );
    }

    #[test]
    fn test_one_plan_per_day() {
        let mut rng = StdRng::seed_from_u64(11);
        let plans = DayScheduler::new(may("2024-05-30", "2024-06-02"))
            .plans(&mut rng)
            .unwrap();

        let dates: Vec<Date> = plans.iter().map(|p| p.date).collect();
        assert_eq!(
            dates,
            vec![
                date!(2024 - 05 - 30),
                date!(2024 - 05 - 31),
                date!(2024 - 06 - 01),
                date!(2024 - 06 - 02),
            ]
        );
        assert_eq!(plans[2].file_name, "6_1.tcx");
    }

    #[test]
    fn test_plans_within_bounds() {
        let mut rng = StdRng::seed_from_u64(5);
        let config = ScheduleConfig {
            calories: CalorieModel::PerMeter(0.1),
            ..may("2024-05-01", "2024-05-31")
        };
        let plans = DayScheduler::new(config).plans(&mut rng).unwrap();
        assert_eq!(plans.len(), 31);

        for plan in &plans {
            assert_eq!(plan.start.date(), plan.date);
            assert!((6..=9).contains(&plan.start.hour()));
            assert!((2800.0..=3300.0).contains(&plan.distance_meters));
            assert!((1450.0..=1700.0).contains(&plan.duration_seconds));
            assert_eq!(plan.duration_seconds.fract(), 0.0);
            assert_eq!(plan.calories, (plan.distance_meters * 0.1).round() as u32);
        }
    }

    #[test]
    fn test_single_day_range() {
        let mut rng = StdRng::seed_from_u64(5);
        let plans = DayScheduler::new(may("2024-05-01", "2024-05-01"))
            .plans(&mut rng)
            .unwrap();
        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].file_name, "5_1.tcx");
    }

    #[test]
    fn test_inverted_range_rejected() {
        let mut rng = StdRng::seed_from_u64(5);
        let result = DayScheduler::new(may("2024-05-31", "2024-05-01")).plans(&mut rng);
        assert!(matches!(result, Err(SynthError::InvalidInput(_))));
    }

    #[test]
    fn test_invalid_hours_rejected() {
        let mut rng = StdRng::seed_from_u64(5);
        let config = ScheduleConfig {
            start_hours: (22, 25),
            ..Default::default()
        };
        assert!(DayScheduler::new(config).plans(&mut rng).is_err());
    }

    #[test]
    fn test_zero_duration_range_rejected() {
        let mut rng = StdRng::seed_from_u64(5);
        let config = ScheduleConfig {
            duration_range_s: (0.0, 0.0),
            ..Default::default()
        };
        assert!(DayScheduler::new(config).plans(&mut rng).is_err());
    }
}
