//! GraphQL documents consumed by the client.

pub const ALL_ORGANIZATIONS: &str = r"
query AllOrganizations {
  allOrganizations {
    id
    slug
    name
  }
}
";

pub const CREATE_ORGANIZATION: &str = r"
mutation CreateOrganization($slug: String!, $name: String!) {
  createOrganization(slug: $slug, name: $name) {
    organization {
      id
      slug
      name
    }
  }
}
";

pub const PROJECTS: &str = r"
query Projects($search: String) {
  projects(search: $search) {
    id
    name
    description
    status
    dueDate
    stats {
      taskCount
      completedTasks
      completionRate
    }
  }
}
";

pub const PROJECT_STATS: &str = r"
query ProjectStats($search: String) {
  projects(search: $search) {
    id
    stats {
      taskCount
      completedTasks
      completionRate
    }
  }
}
";

pub const CREATE_PROJECT: &str = r"
mutation CreateProject($name: String!, $description: String, $status: String, $dueDate: Date) {
  createProject(name: $name, description: $description, status: $status, dueDate: $dueDate) {
    project {
      id
      name
      description
      status
      dueDate
      stats {
        taskCount
        completedTasks
        completionRate
      }
    }
  }
}
";

pub const UPDATE_PROJECT: &str = r"
mutation UpdateProject($id: ID!, $name: String, $description: String, $status: String, $dueDate: Date) {
  updateProject(id: $id, name: $name, description: $description, status: $status, dueDate: $dueDate) {
    project {
      id
      name
      description
      status
      dueDate
      stats {
        taskCount
        completedTasks
        completionRate
      }
    }
  }
}
";

pub const TASKS: &str = r"
query Tasks($projectId: ID) {
  tasks(projectId: $projectId) {
    id
    title
    description
    status
    assigneeEmail
    dueDate
  }
}
";

pub const CREATE_TASK: &str = r"
mutation CreateTask(
  $projectId: ID!
  $title: String!
  $description: String
  $status: String
  $assigneeEmail: String
  $dueDate: DateTime
) {
  createTask(
    projectId: $projectId
    title: $title
    description: $description
    status: $status
    assigneeEmail: $assigneeEmail
    dueDate: $dueDate
  ) {
    task {
      id
      title
      description
      status
      assigneeEmail
      dueDate
    }
  }
}
";

pub const UPDATE_TASK: &str = r"
mutation UpdateTask(
  $id: ID!
  $title: String
  $description: String
  $status: String
  $assigneeEmail: String
  $dueDate: DateTime
) {
  updateTask(
    id: $id
    title: $title
    description: $description
    status: $status
    assigneeEmail: $assigneeEmail
    dueDate: $dueDate
  ) {
    task {
      id
      title
      description
      status
      assigneeEmail
      dueDate
    }
  }
}
";

pub const ADD_TASK_COMMENT: &str = r"
mutation AddTaskComment($taskId: ID!, $content: String!, $authorEmail: String!) {
  addTaskComment(taskId: $taskId, content: $content, authorEmail: $authorEmail) {
    comment {
      id
      content
      authorEmail
      timestamp
    }
  }
}
";
