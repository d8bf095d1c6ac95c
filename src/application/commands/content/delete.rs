use super::ContentCommandService;
use crate::{
    application::{error::ApplicationResult, ports::identity::Viewer},
    domain::content::ContentId,
};

pub struct DeleteContentCommand {
    pub id: i64,
}

impl ContentCommandService {
    pub async fn delete_content(
        &self,
        viewer: Option<&Viewer>,
        command: DeleteContentCommand,
    ) -> ApplicationResult<()> {
        let user = self.admin_account(viewer).await?;
        let id = ContentId::new(command.id)?;
        self.owned_item(id, &user).await?;

        self.write_repo.delete(id).await?;
        tracing::info!(content_id = id.0, author_id = user.id.0, "content deleted");
        Ok(())
    }
}
