mod assignments;
pub use self::assignments::{
    AssignmentAttributes, AssignmentPath, CourseAssignmentsPath, CreateAssignment,
    CreateAssignmentForm, DeleteAssignment, GetSingleAssignment, GetSingleAssignmentQuery,
    ListAssignments, ListAssignmentsQuery, ASSIGNMENT_BUCKETS, ASSIGNMENT_INCLUDES,
    ASSIGNMENT_LIST_INCLUDES, ASSIGNMENT_ORDERS, GRADING_TYPES, SUBMISSION_TYPES,
};

mod courses;
pub use self::courses::{
    CourseAttributes, CourseEventOutcome, CoursePath, CreateNewCourse, CreateNewCourseForm,
    CreateNewCoursePath, DeleteConcludeCourse, DeleteConcludeCourseQuery, GetSingleCourse,
    GetSingleCourseQuery, ListYourCourses, ListYourCoursesQuery, UpdateCourse, UpdateCourseForm,
    COURSE_DEFAULT_VIEWS, COURSE_ENROLLMENT_STATES, COURSE_ENROLLMENT_TYPES, COURSE_EVENTS,
    COURSE_INCLUDES, COURSE_LICENSES, COURSE_STATES, DELETE_COURSE_EVENTS,
};

mod enrollments;
pub use self::enrollments::{
    ConcludeEnrollment, ConcludeEnrollmentQuery, CourseEnrollmentsPath, EnrollUser,
    EnrollUserForm, EnrollmentAttributes, EnrollmentPath, ListEnrollmentsCourse,
    ListEnrollmentsCourseQuery, ENROLLMENT_INCLUDES, ENROLLMENT_LIST_STATES, ENROLLMENT_TASKS,
    ENROLLMENT_TYPES, NEW_ENROLLMENT_STATES,
};

mod favorites;
pub use self::favorites::{AddCourseToFavorites, AddCourseToFavoritesPath, ResetCourseFavorites};

mod groups;
pub use self::groups::{
    AssignUnassignedMembers, AssignUnassignedMembersForm, AssignUnassignedMembersPath,
    UnassignedMembersOutcome,
};

mod modules;
pub use self::modules::{
    ListModules, ListModulesPath, ListModulesQuery, MarkModuleItemDone, MarkModuleItemDonePath,
    MODULE_INCLUDES,
};

mod progress;
pub use self::progress::{QueryProgress, QueryProgressPath};

mod submissions;
pub use self::submissions::{
    AssignmentSubmissionsPath, GradeAttributes, GradeComment, GradeSubmission,
    GradeSubmissionForm, ListAssignmentSubmissions, ListAssignmentSubmissionsQuery,
    MarkSubmissionAsRead, SubmissionPath, LATE_POLICY_STATUSES, SUBMISSION_INCLUDES,
};

mod users;
pub use self::users::{
    EditUser, EditUserAttributes, EditUserForm, ListUsersInCourse, ListUsersInCoursePath,
    ListUsersInCourseQuery, ShowUserDetails, ShowUserDetailsQuery, UserPath,
    COURSE_USER_ENROLLMENT_STATES, COURSE_USER_ENROLLMENT_TYPES, COURSE_USER_INCLUDES,
    COURSE_USER_SORTS, USER_DETAIL_INCLUDES,
};
