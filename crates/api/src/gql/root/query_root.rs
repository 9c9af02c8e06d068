use async_graphql::MergedObject;

use crate::gql::domains::branches::BranchQuery;
use crate::gql::domains::clubs::ClubQuery;
use crate::gql::domains::schedules::ScheduleQuery;

#[derive(MergedObject, Default)]
pub struct QueryRoot(ClubQuery, BranchQuery, ScheduleQuery);
