//! Strongly-typed identifiers for league records.
//!
//! Every identifier that crosses the repository boundary is an `i64` newtype,
//! so a job id can never be handed to a lookup that expects a team id.

crate::define_id_type!(i64, JobId);
crate::define_id_type!(i64, CustomerId);
crate::define_id_type!(i64, GameId);
crate::define_id_type!(i64, TeamId);
crate::define_id_type!(i64, ClubId);
crate::define_id_type!(i64, DivisionId);
crate::define_id_type!(i64, AgegroupId);
crate::define_id_type!(i64, FieldId);
crate::define_id_type!(i64, LeagueId);
