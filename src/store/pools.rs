use chrono::Utc;
use uuid::Uuid;

use crate::data::schedule::season_end;
use crate::models::pool::{
    CreatePoolRequest, Pool, PoolMember, PoolStatus, UpdatePoolRequest,
};
use crate::models::user::UserRef;
use crate::pool::codes::generate_join_code;
use crate::store::{recompute, AppStore, StoreError};

impl AppStore {
    #[tracing::instrument(name = "Create pool", skip(self, owner, request), fields(owner_id = %owner.id, pool_name = %request.name))]
    pub async fn create_pool(
        &self,
        owner: UserRef,
        request: CreatePoolRequest,
    ) -> Result<Pool, StoreError> {
        let pool = {
            let mut state = self.state().write().await;
            let pool_id = Uuid::new_v4();
            let is_private = request.is_private.unwrap_or(true);
            let member = PoolMember {
                id: format!("member-{}", pool_id),
                user_id: owner.id,
                user: owner.clone(),
                pool_id,
                points: 0,
                rank: 1,
                joined_at: Utc::now(),
            };
            let pool = Pool {
                id: pool_id,
                name: request.name,
                description: request.description.unwrap_or_default(),
                owner_id: owner.id,
                owner,
                members: vec![member],
                is_private,
                code: is_private.then(generate_join_code),
                predictions_private: request.predictions_private.unwrap_or(true),
                created_at: Utc::now(),
                ends_at: request.ends_at.unwrap_or_else(season_end),
                prize: request.prize,
                status: PoolStatus::Active,
            };
            state.pools.insert(0, pool.clone());
            pool
        };
        self.persist_pools().await?;
        tracing::info!("Created pool {} ({})", pool.name, pool.id);
        Ok(pool)
    }

    /// Join a pool. Private pools require the exact join code. Joining a pool
    /// one is already a member of succeeds as a no-op. The roster is
    /// recomputed before the mutation becomes visible, so the new member's
    /// rank is never stale.
    #[tracing::instrument(name = "Join pool", skip(self, user), fields(user_id = %user.id))]
    pub async fn join_pool(
        &self,
        pool_id: Uuid,
        user: UserRef,
        code: Option<&str>,
    ) -> Result<Pool, StoreError> {
        let pool = {
            let mut state = self.state().write().await;
            let pool_index = state
                .pools
                .iter()
                .position(|p| p.id == pool_id)
                .ok_or(StoreError::PoolNotFound)?;
            {
                let pool = &state.pools[pool_index];
                if pool.is_private && pool.code.as_deref() != code {
                    return Err(StoreError::InvalidJoinCode);
                }
                if pool.is_member(user.id) {
                    return Ok(pool.clone());
                }
            }
            let member = PoolMember {
                id: format!("member-{}-{}", pool_id, user.id),
                user_id: user.id,
                user,
                pool_id,
                points: 0,
                rank: state.pools[pool_index].members.len() as u32 + 1,
                joined_at: Utc::now(),
            };
            state.pools[pool_index].members.push(member);
            recompute(&mut state, self.rules());
            state.pools[pool_index].clone()
        };
        self.persist_pools().await?;
        tracing::info!("User joined pool {}", pool.id);
        Ok(pool)
    }

    /// Leave a pool. The owner can never leave; deleting the pool is the
    /// only way out for them. Cascades the member's predictions in the pool.
    #[tracing::instrument(name = "Leave pool", skip(self))]
    pub async fn leave_pool(&self, pool_id: Uuid, user_id: Uuid) -> Result<(), StoreError> {
        {
            let mut state = self.state().write().await;
            let pool = state
                .pools
                .iter_mut()
                .find(|p| p.id == pool_id)
                .ok_or(StoreError::PoolNotFound)?;
            if pool.owner_id == user_id {
                return Err(StoreError::OwnerCannotLeave);
            }
            pool.members.retain(|m| m.user_id != user_id);
            state
                .predictions
                .retain(|p| !(p.pool_id == pool_id && p.user_id == user_id));
            recompute(&mut state, self.rules());
        }
        self.persist_predictions().await?;
        self.persist_pools().await?;
        tracing::info!("User {} left pool {}", user_id, pool_id);
        Ok(())
    }

    /// Delete a pool together with all of its predictions. Owner only.
    /// Predictions are persisted first so a mid-way failure can leave a pool
    /// without predictions, but never predictions without a pool.
    #[tracing::instrument(name = "Delete pool", skip(self))]
    pub async fn delete_pool(&self, pool_id: Uuid, user_id: Uuid) -> Result<(), StoreError> {
        {
            let mut state = self.state().write().await;
            let pool = state
                .pools
                .iter()
                .find(|p| p.id == pool_id)
                .ok_or(StoreError::PoolNotFound)?;
            if pool.owner_id != user_id {
                return Err(StoreError::NotOwner);
            }
            state.predictions.retain(|p| p.pool_id != pool_id);
            state.pools.retain(|p| p.id != pool_id);
            recompute(&mut state, self.rules());
        }
        self.persist_predictions().await?;
        self.persist_pools().await?;
        tracing::info!("Deleted pool {}", pool_id);
        Ok(())
    }

    /// Owner-gated field updates; admins bypass the ownership check. Turning
    /// privacy on synthesizes a join code if none exists; turning it off
    /// clears it.
    #[tracing::instrument(name = "Update pool", skip(self, request))]
    pub async fn update_pool(
        &self,
        pool_id: Uuid,
        actor_id: Uuid,
        is_admin: bool,
        request: UpdatePoolRequest,
    ) -> Result<Pool, StoreError> {
        let pool = {
            let mut state = self.state().write().await;
            let pool = state
                .pools
                .iter_mut()
                .find(|p| p.id == pool_id)
                .ok_or(StoreError::PoolNotFound)?;
            if !is_admin && pool.owner_id != actor_id {
                return Err(StoreError::NotOwner);
            }
            if let Some(name) = request.name {
                pool.name = name;
            }
            if let Some(description) = request.description {
                pool.description = description;
            }
            if let Some(prize) = request.prize {
                pool.prize = Some(prize);
            }
            if let Some(predictions_private) = request.predictions_private {
                pool.predictions_private = predictions_private;
            }
            if let Some(is_private) = request.is_private {
                pool.is_private = is_private;
                if is_private {
                    if pool.code.is_none() {
                        pool.code = Some(generate_join_code());
                    }
                } else {
                    pool.code = None;
                }
            }
            pool.clone()
        };
        self.persist_pools().await?;
        Ok(pool)
    }

    pub async fn get_pool(&self, pool_id: Uuid) -> Option<Pool> {
        let state = self.state().read().await;
        state.pools.iter().find(|p| p.id == pool_id).cloned()
    }

    /// Pools the user owns or belongs to.
    pub async fn user_pools(&self, user_id: Uuid) -> Vec<Pool> {
        let state = self.state().read().await;
        state
            .pools
            .iter()
            .filter(|p| p.owner_id == user_id || p.is_member(user_id))
            .cloned()
            .collect()
    }

    pub async fn public_pools(&self) -> Vec<Pool> {
        let state = self.state().read().await;
        state.pools.iter().filter(|p| !p.is_private).cloned().collect()
    }
}
