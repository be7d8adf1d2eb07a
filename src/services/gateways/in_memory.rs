use std::collections::HashMap;

use color_eyre::eyre::eyre;
use secrecy::{ExposeSecret, Secret};

use crate::domain::{
    AuthGateway, AuthGatewayError, Email, GatewayError, Member, MemberGateway,
    MemberRoster, MemberUpdate, NewMember,
};
use crate::utils::auth::generate_session_token;

// Backend double holding the roster in two vecs, classified the same way
// the real backend classifies: a member with an exec role is an executive.
#[derive(Default)]
pub struct InMemoryMemberGateway {
    exec: Vec<Member>,
    non_exec: Vec<Member>,
    next_id: i64,
}

impl InMemoryMemberGateway {
    fn place(&mut self, member: Member) {
        if member.exec_role.is_some() {
            self.exec.push(member);
        } else {
            self.non_exec.push(member);
        }
    }

    fn take(&mut self, id: i64) -> Option<Member> {
        if let Some(pos) = self.exec.iter().position(|m| m.id == id) {
            return Some(self.exec.remove(pos));
        }
        if let Some(pos) = self.non_exec.iter().position(|m| m.id == id) {
            return Some(self.non_exec.remove(pos));
        }
        None
    }
}

#[async_trait::async_trait]
impl MemberGateway for InMemoryMemberGateway {
    async fn list(&self) -> Result<MemberRoster, GatewayError> {
        Ok(MemberRoster {
            total_count: (self.exec.len() + self.non_exec.len()) as u32,
            exec: self.exec.clone(),
            non_exec: self.non_exec.clone(),
        })
    }

    async fn add(&mut self, new_member: NewMember) -> Result<(), GatewayError> {
        self.next_id += 1;
        let id = self.next_id;

        let member = Member {
            id,
            name: new_member.name.as_ref().to_owned(),
            exec_role: new_member
                .exec_role
                .map(|r| r.as_ref().to_owned()),
            headshot_url: format!(
                "/assets/headshots/{id}-{}",
                new_member.headshot.file_name
            ),
            relative_order: None,
        };
        self.place(member);

        Ok(())
    }

    async fn update(
        &mut self,
        id: i64,
        update: MemberUpdate,
    ) -> Result<(), GatewayError> {
        let mut member = self.take(id).ok_or(GatewayError::IdNotFound(id))?;

        member.name = update.name.as_ref().to_owned();
        member.exec_role = update.exec_role.map(|r| r.as_ref().to_owned());
        if let Some(headshot) = update.headshot {
            member.headshot_url =
                format!("/assets/headshots/{id}-{}", headshot.file_name);
        }
        self.place(member);

        Ok(())
    }

    async fn delete(&mut self, id: i64) -> Result<(), GatewayError> {
        self.take(id)
            .map(|_| ())
            .ok_or(GatewayError::IdNotFound(id))
    }
}

// Auth provider double: a fixed credential set, minting tokens with the
// same signing secret the guard validates against.
#[derive(Default)]
pub struct InMemoryAuthGateway {
    users: HashMap<String, Secret<String>>,
}

impl InMemoryAuthGateway {
    pub fn with_user(mut self, email: &str, password: &str) -> Self {
        self.users
            .insert(email.to_owned(), Secret::new(password.to_owned()));
        self
    }
}

#[async_trait::async_trait]
impl AuthGateway for InMemoryAuthGateway {
    async fn sign_in(
        &self,
        email: &Email,
        password: &Secret<String>,
    ) -> Result<Secret<String>, AuthGatewayError> {
        let stored = self
            .users
            .get(email.as_ref().expose_secret())
            .ok_or(AuthGatewayError::IncorrectCredentials)?;

        if stored.expose_secret() != password.expose_secret() {
            return Err(AuthGatewayError::IncorrectCredentials);
        }

        generate_session_token(email)
            .map_err(|e| AuthGatewayError::UnexpectedError(eyre!(e)))
    }

    async fn sign_out(
        &self,
        _token: &Secret<String>,
    ) -> Result<(), AuthGatewayError> {
        Ok(())
    }
}
