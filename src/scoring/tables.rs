//! Fixed scoring tables for the three test events.
//!
//! Counts and times are keyed exactly; nothing in here is interpolated.

/// Maximum points for a count-based event (pushups or situps).
pub const COUNT_EVENT_MAX: f64 = 20.0;

/// Pushup count at or above which the full 20 points are awarded.
pub const PUSHUP_MAX: u32 = 67;

/// Lowest pushup count that earns any points.
pub const PUSHUP_MIN: u32 = 30;

/// Situp count at or above which the full 20 points are awarded.
pub const SITUP_MAX: u32 = 58;

/// Lowest situp count that earns any points.
pub const SITUP_MIN: u32 = 39;

/// Score for the best run band.
pub const RUN_MAX_SCORE: f64 = 60.0;

/// Points per pushup count, 30..=67. Deltas are irregular (53 and 54 share 17.6).
pub const PUSHUP_TABLE: &[(u32, f64)] = &[
    (67, 20.0),
    (66, 19.8),
    (65, 19.6),
    (64, 19.4),
    (63, 19.2),
    (62, 19.0),
    (61, 18.8),
    (60, 18.6),
    (59, 18.4),
    (58, 18.2),
    (57, 18.0),
    (56, 17.8),
    (55, 17.7),
    (54, 17.6),
    (53, 17.6),
    (52, 17.2),
    (51, 17.0),
    (50, 16.8),
    (49, 16.4),
    (48, 16.2),
    (47, 16.0),
    (46, 15.6),
    (45, 15.4),
    (44, 15.0),
    (43, 14.6),
    (42, 14.2),
    (41, 14.0),
    (40, 13.8),
    (39, 13.0),
    (38, 12.6),
    (37, 12.0),
    (36, 11.6),
    (35, 11.2),
    (34, 11.0),
    (33, 10.8),
    (32, 7.0),
    (31, 4.0),
    (30, 1.0),
];

/// Points per situp count, 39..=58.
pub const SITUP_TABLE: &[(u32, f64)] = &[
    (58, 20.0),
    (57, 19.7),
    (56, 19.4),
    (55, 19.0),
    (54, 18.8),
    (53, 18.4),
    (52, 18.0),
    (51, 17.6),
    (50, 17.4),
    (49, 17.0),
    (48, 16.6),
    (47, 16.0),
    (46, 15.0),
    (45, 14.0),
    (44, 13.0),
    (43, 12.6),
    (42, 12.0),
    (41, 9.0),
    (40, 6.0),
    (39, 3.0),
];

/// Run bands as (max seconds inclusive, score), fastest first.
///
/// A time belongs to the first band whose bound it does not exceed.
pub const RUN_BREAKPOINTS: &[(u32, f64)] = &[
    (552, 60.0), // <= 9:12
    (574, 59.5), // 9:13 - 9:34
    (585, 59.0), // 9:35 - 9:45
    (598, 58.5), // 9:46 - 9:58
    (610, 58.0), // 9:59 - 10:10
    (623, 57.5), // 10:11 - 10:23
    (637, 57.0), // 10:24 - 10:37
    (651, 56.5), // 10:38 - 10:51
    (666, 56.0), // 10:52 - 11:06
    (682, 55.5), // 11:07 - 11:22
    (698, 55.0), // 11:23 - 11:38
    (716, 54.5), // 11:39 - 11:56
    (734, 54.0), // 11:57 - 12:14
    (753, 53.5), // 12:15 - 12:33
    (773, 52.0), // 12:34 - 12:53
    (794, 50.5), // 12:54 - 13:14
    (816, 49.0), // 13:15 - 13:36
    (840, 46.5), // 13:37 - 14:00
    (865, 44.0), // 14:01 - 14:25
    (892, 41.0), // 14:26 - 14:52
    (920, 38.0), // 14:53 - 15:20
    (950, 35.0), // 15:21 - 15:50
];
