use async_graphql::MergedObject;

use crate::gql::domains::branches::BranchMutation;
use crate::gql::domains::clubs::ClubMutation;
use crate::gql::domains::schedules::ScheduleMutation;

#[derive(MergedObject, Default)]
pub struct MutationRoot(ClubMutation, BranchMutation, ScheduleMutation);
