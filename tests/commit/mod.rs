mod write_commit_object_successfully_for_nested_project;
